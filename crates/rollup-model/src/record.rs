//! Accessor traits shared by every record type

/// Record that belongs to a group identified by a string key
pub trait Keyed {
    /// Group key, or `None` when the record was built without one
    fn group_key(&self) -> Option<&str>;
}

/// Record with a display name
pub trait Named {
    /// Display name
    fn name(&self) -> &str;
}

/// Record carrying a numeric payload that can be summed
pub trait Weighted {
    /// Numeric payload, or `None` when absent
    fn amount(&self) -> Option<f64>;
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn group_key(&self) -> Option<&str> {
        (**self).group_key()
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn amount(&self) -> Option<f64> {
        (**self).amount()
    }
}
