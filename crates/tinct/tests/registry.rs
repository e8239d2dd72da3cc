//! Registry caching and precedence.

use std::sync::{Arc, Barrier};
use std::thread;

use tinct::meta::{ArgKind, ArgMismatch, ArgValue, FromArg};
use tinct::property::{PropertyDescriptor, PropertyRegistry};
use tinct::{Importer, Style};

#[test]
fn test_concurrent_first_resolution() {
    const THREADS: usize = 8;

    let registry = PropertyRegistry::<Style>::new();
    let barrier = Barrier::new(THREADS);

    let descriptors: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    registry.resolve("border-top-background").unwrap()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let first = &descriptors[0];
    assert!(descriptors.iter().all(|d| Arc::ptr_eq(d, first)));
    assert_eq!(registry.discovered_len(), 1);
}

#[test]
fn test_repeat_resolution_is_shared() {
    let registry = PropertyRegistry::global();
    let a = registry.resolve("max-width").unwrap();
    let b = registry.resolve("max-width").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

fn emphasis() -> PropertyDescriptor<Style> {
    PropertyDescriptor::new("bold", |style: Style, args: Vec<ArgValue>| {
        let on = args
            .into_iter()
            .next()
            .map(bool::from_arg)
            .ok_or(ArgMismatch::Missing { index: 0 })??;
        Ok(style.bold(on).italic(on))
    })
    .param(ArgKind::Bool)
    .unsetter(|style: Style| style.unset_bold().unset_italic())
}

#[test]
fn test_registered_descriptor_takes_precedence() {
    let registry = PropertyRegistry::<Style>::new();
    let discovered = registry.resolve("bold").unwrap();
    let registered = registry.register(emphasis());
    assert!(!Arc::ptr_eq(&discovered, &registered));
    assert!(Arc::ptr_eq(&registry.resolve("bold").unwrap(), &registered));

    let importer = Importer::new(&registry);
    let style = importer.import(Style::new(), "bold: true").unwrap();
    assert!(style.get_bold() && style.get_italic());

    let style = importer.import(style, "bold: unset").unwrap();
    assert_eq!(style, Style::new());
}

#[test]
fn test_registered_names_are_listed() {
    let registry = PropertyRegistry::<Style>::new();
    let before = registry.properties();

    registry.register(PropertyDescriptor::new(
        "shout",
        |style: Style, _args: Vec<ArgValue>| Ok(style.bold(true)),
    ));

    let after = registry.properties();
    assert_eq!(after.len(), before.len() + 1);
    assert!(after.iter().any(|name| name == "shout"));

    let style = Importer::new(&registry).import(Style::new(), "shout: ").unwrap();
    assert!(style.get_bold());
}
