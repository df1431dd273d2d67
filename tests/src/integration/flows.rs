//! Service-level lifecycle scenarios across the registry's full operation
//! set: many manufacturers, chained transfers, and the ledger staying
//! append-only throughout.

use veritas_registry::prelude::*;

fn identity(tag: u8) -> Identity {
    Identity::new([tag; 20])
}

fn price(s: &str) -> TokenAmount {
    s.parse().unwrap()
}

fn service() -> RegistryService<InMemoryStore> {
    RegistryService::new(InMemoryStore::new(), ServiceConfig::default())
}

#[tokio::test]
async fn two_manufacturers_cannot_cross_register() {
    let svc = service();
    let acme = identity(1);
    let globex = identity(2);

    svc.register_manufacturer(acme, "ACME", "Acme Corp").await.unwrap();
    svc.register_manufacturer(globex, "GLOBEX", "Globex Inc").await.unwrap();

    // Each may only mint under its own ID
    let err = svc
        .register_product(acme, "GLOBEX", "Widget", "SN100", price("1.0"), "Globex")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);

    svc.register_product(acme, "ACME", "Widget", "SN100", price("1.0"), "Acme")
        .await
        .unwrap();
    svc.register_product(globex, "GLOBEX", "Gadget", "SN200", price("2.5"), "Globex")
        .await
        .unwrap();

    assert_eq!(
        svc.verify_product("SN100").await.unwrap().manufacturer,
        acme
    );
    assert_eq!(
        svc.verify_product("SN200").await.unwrap().manufacturer,
        globex
    );
}

#[tokio::test]
async fn product_moves_through_a_chain_of_sellers() {
    let svc = service();
    let maker = identity(1);
    let first = identity(2);
    let second = identity(3);

    svc.register_manufacturer(maker, "ACME", "Acme Corp").await.unwrap();
    svc.register_product(maker, "ACME", "Widget", "SN100", price("1.0"), "Acme")
        .await
        .unwrap();
    svc.add_seller(first, "SELLER001", "First Shop", "Acme")
        .await
        .unwrap();
    svc.add_seller(second, "SELLER002", "Second Shop", "Acme")
        .await
        .unwrap();

    // Owner advances through any number of registered sellers, always at the
    // manufacturer's request
    svc.transfer_product(maker, "SN100", first).await.unwrap();
    assert_eq!(
        svc.verify_product("SN100").await.unwrap().current_owner,
        first
    );

    svc.transfer_product(maker, "SN100", second).await.unwrap();
    assert_eq!(
        svc.verify_product("SN100").await.unwrap().current_owner,
        second
    );

    // Holding the product does not grant transfer rights
    let err = svc
        .transfer_product(second, "SN100", first)
        .await
        .unwrap_err();
    assert_eq!(err, RegistryError::NotProductManufacturer("SN100".into()));

    let stats = svc.stats();
    assert_eq!(stats.products_transferred, 2);
    assert_eq!(stats.rejected_operations, 1);
}

#[tokio::test]
async fn registry_stays_append_only_under_rejections() {
    let svc = service();
    let maker = identity(1);
    let intruder = identity(9);

    svc.register_manufacturer(maker, "ACME", "Acme Corp").await.unwrap();
    svc.register_product(maker, "ACME", "Widget", "SN100", price("1.0"), "Acme")
        .await
        .unwrap();

    let before = svc.verify_product("SN100").await.unwrap();

    // A burst of rejected operations leaves every record untouched
    let _ = svc.register_manufacturer(intruder, "ACME", "Fake Acme").await;
    let _ = svc
        .register_product(intruder, "ACME", "Fake", "SN100", price("0.1"), "Fake")
        .await;
    let _ = svc.transfer_product(intruder, "SN100", intruder).await;
    let _ = svc.transfer_product(maker, "SN100", intruder).await;

    assert_eq!(svc.verify_product("SN100").await.unwrap(), before);
    assert_eq!(
        svc.get_manufacturer_info("ACME").await.unwrap().name,
        "Acme Corp"
    );
    assert!(svc.is_product_authentic("SN100").await);
}
