//! Logging shims: forward to `defmt` when the `defmt` feature is enabled, compile to nothing
//! otherwise (the arguments are still borrowed so they don't show up as unused).

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( & $x ),*);
        }
    };
}
