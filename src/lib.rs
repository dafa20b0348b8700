pub mod thing;

pub use thing::{Config, Thing, bar_config, foo_config};

/// The five demonstration cases, in the order they are printed.
pub fn demo_things() -> Vec<Thing> {
    vec![
        Thing::new([]),
        Thing::new([foo_config(13)]),
        Thing::new([bar_config("awesome")]),
        Thing::new([foo_config(13), bar_config("awesome")]),
        Thing::new([bar_config("awesome"), foo_config(13)]),
    ]
}
