//@ ---
//@ marp: true
//@ ---
//@
//@ # Functional configuration
//@
//@ A `Thing` starts out with defaults and is configured by a list of
//@ small functions, each setting one field.

use std::fmt;

use log::{debug, trace};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thing {
    foo: i64,
    bar: String,
}

/// A configuration function: mutates one field of a `Thing`.
pub type Config = Box<dyn FnOnce(&mut Thing)>;

//@ ---
//@
//@ ## Construction applies the options, in order

impl Thing {
    pub fn new<I>(configs: I) -> Thing
    where
        I: IntoIterator<Item = Config>,
    {
        let mut thing = Thing::default();
        debug!("building {:?}", thing);

        for (i, config) in configs.into_iter().enumerate() {
            config(&mut thing);
            trace!("after option {}: {:?}", i, thing);
        }

        thing
    }

    pub fn foo(&self) -> i64 {
        self.foo
    }

    pub fn bar(&self) -> &str {
        &self.bar
    }
}

//@ ---
//@
//@ ## Options close over their argument

pub fn foo_config(f: i64) -> Config {
    Box::new(move |thing: &mut Thing| thing.foo = f)
}

pub fn bar_config(b: impl Into<String>) -> Config {
    let b = b.into();
    Box::new(move |thing: &mut Thing| thing.bar = b)
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Foo: {}, Bar: {}", self.foo, self.bar)
    }
}
