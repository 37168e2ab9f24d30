// SPDX-License-Identifier: Apache-2.0

use super::super::cake::CAKE_VTABLE;
use super::super::fq_pie::FQ_PIE_VTABLE;
use crate::{ErrorKind, QdiscKind, QdiscRegistry};

#[test]
fn test_registry_lookup_unregistered_kind() {
    let registry = QdiscRegistry::new();
    let result = registry.lookup(QdiscKind::FqPie);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::UnknownKind);
    }
}

#[test]
fn test_registry_register_and_lookup() {
    let mut registry = QdiscRegistry::new();
    registry.register(&FQ_PIE_VTABLE).unwrap();

    let vtable = registry.lookup(QdiscKind::FqPie).unwrap();
    assert_eq!(vtable.kind, QdiscKind::FqPie);
    assert_eq!(vtable.tca_kind, "fq_pie");
}

#[test]
fn test_registry_duplicate_register() {
    let mut registry = QdiscRegistry::new();
    registry.register(&CAKE_VTABLE).unwrap();

    let result = registry.register(&CAKE_VTABLE);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
    assert!(registry.lookup(QdiscKind::Cake).is_ok());
}

#[test]
fn test_registry_builtin_kinds() {
    let registry = QdiscRegistry::builtin();
    assert_eq!(
        registry.lookup(QdiscKind::FqPie).unwrap().tca_kind,
        "fq_pie"
    );
    assert_eq!(registry.lookup(QdiscKind::Cake).unwrap().tca_kind, "cake");
}

#[test]
fn test_registry_install_once() {
    // Other tests may have resolved the process-wide registry already,
    // in which case the first install is allowed to fail too.
    let _ = QdiscRegistry::builtin().install();
    assert!(QdiscRegistry::builtin().install().is_err());
    assert!(QdiscRegistry::get().lookup(QdiscKind::FqPie).is_ok());
    assert!(QdiscRegistry::get().lookup(QdiscKind::Cake).is_ok());
}
