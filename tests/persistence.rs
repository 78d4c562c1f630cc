//! Saving galleries to a key-value store and restoring them.

mod support;

use gallery_model::store::{GalleryStore, InMemoryStore, KeyValueStore, StoreConfig};
use gallery_model::{ImageCollectionModel, ImageModel};
use support::spy::Spy;
use support::{fixed_date, image};

fn gallery_store(kv: &InMemoryStore) -> GalleryStore<InMemoryStore> {
    GalleryStore::new(kv.clone(), StoreConfig::default())
}

#[test]
fn survives_a_reload() {
    let kv = InMemoryStore::new();
    let store = gallery_store(&kv);

    let collection = ImageCollectionModel::new();
    let beach = ImageModel::new("images/beach.jpg", fixed_date(), "", 0).unwrap();
    collection.add_image_model(beach.clone()).unwrap();
    collection.add_image_model(image("images/city.jpg", 2)).unwrap();
    beach.set_caption("sunset");
    beach.set_rating(5).unwrap();

    store.save_collection(&collection).unwrap();

    let restored = gallery_store(&kv).load_collection().unwrap();
    let models = restored.image_models();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].path(), "images/beach.jpg");
    assert_eq!(models[0].caption(), "sunset");
    assert_eq!(models[0].rating().value(), 5);
    assert_eq!(models[0].modification_date(), beach.modification_date());
    assert_eq!(models[1].path(), "images/city.jpg");
    assert_eq!(models[1].modification_date(), fixed_date());
}

#[test]
fn empty_store_loads_an_empty_collection() {
    let kv = InMemoryStore::new();
    let collection = gallery_store(&kv).load_collection().unwrap();
    assert!(collection.is_empty());
}

#[test]
fn restored_collection_cascades_like_a_fresh_one() {
    let kv = InMemoryStore::new();
    let store = gallery_store(&kv);
    let original = ImageCollectionModel::new();
    original.add_image_model(image("a.jpg", 0)).unwrap();
    store.save_collection(&original).unwrap();

    let restored = store.load_collection().unwrap();
    let spy = Spy::<ImageCollectionModel>::new();
    restored.add_shared_listener(spy.listener());

    restored.image_models()[0].set_rating(3).unwrap();

    assert_eq!(spy.call_count(), 1);
}

#[test]
fn autosave_writes_after_every_change() {
    let kv = InMemoryStore::new();
    let store = gallery_store(&kv);
    let collection = ImageCollectionModel::new();
    store.autosave(&collection);

    let pic = image("images/pic.jpg", 0);
    collection.add_image_model(pic.clone()).unwrap();
    assert_eq!(store.load_collection().unwrap().len(), 1);

    pic.set_caption("sup");
    let reloaded = store.load_image("images/pic.jpg").unwrap().unwrap();
    assert_eq!(reloaded.caption(), "sup");

    collection.remove_image_model(&pic);
    assert!(store.load_collection().unwrap().is_empty());
    assert_eq!(kv.get("gallery:image:images/pic.jpg").unwrap(), None);
}

#[test]
fn autosave_stops_when_its_listener_is_removed() {
    let kv = InMemoryStore::new();
    let store = gallery_store(&kv);
    let collection = ImageCollectionModel::new();
    let id = store.autosave(&collection);

    let pic = image("images/pic.jpg", 0);
    collection.add_image_model(pic.clone()).unwrap();
    assert!(collection.remove_listener(id));

    pic.set_caption("not saved");

    let stored = store.load_image("images/pic.jpg").unwrap().unwrap();
    assert_eq!(stored.caption(), "");
}

#[test]
fn models_work_without_any_store() {
    let collection = ImageCollectionModel::new();
    let pic = image("images/pic.jpg", 0);
    collection.add_image_model(pic.clone()).unwrap();
    pic.set_rating(4).unwrap();
    assert_eq!(collection.image_models()[0].rating().value(), 4);
}
