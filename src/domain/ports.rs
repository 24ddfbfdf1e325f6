use std::ffi::OsString;

/// Read-only lookup of named configuration values.
pub trait PropertySource {
    fn property(&self, key: &str) -> Option<OsString>;

    /// Falls back to `other` for keys this source does not have.
    fn or<S: PropertySource>(self, other: S) -> Chain<Self, S>
    where
        Self: Sized,
    {
        Chain {
            first: self,
            second: other,
        }
    }
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn property(&self, key: &str) -> Option<OsString> {
        (**self).property(key)
    }
}

impl<T: PropertySource + ?Sized> PropertySource for Box<T> {
    fn property(&self, key: &str) -> Option<OsString> {
        (**self).property(key)
    }
}

impl<T: PropertySource> PropertySource for Option<T> {
    fn property(&self, key: &str) -> Option<OsString> {
        self.as_ref().and_then(|source| source.property(key))
    }
}

#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: PropertySource, B: PropertySource> PropertySource for Chain<A, B> {
    fn property(&self, key: &str) -> Option<OsString> {
        self.first
            .property(key)
            .or_else(|| self.second.property(key))
    }
}
