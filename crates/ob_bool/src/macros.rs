/// Returns a new claim on `True` as a raw object pointer.
#[macro_export]
macro_rules! return_true {
    () => {
        return $crate::BoolRef::py_true().into_raw()
    };
}

/// Returns a new claim on `False` as a raw object pointer.
#[macro_export]
macro_rules! return_false {
    () => {
        return $crate::BoolRef::py_false().into_raw()
    };
}
