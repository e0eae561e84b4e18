//! Physical quantities used throughout the simulation.
//!
//! Everything is stored as `f64` in SI base units. The short constructor
//! functions exist because `Length::new::<meter>(x)` is very long-winded when
//! writing literals.

pub mod todo;

pub use uom;
pub use uom::si::Quantity;
pub use uom::si::f64::{
    Acceleration, Angle, Area, Energy, Frequency, Length, Power, Ratio, Time, Velocity,
};

mod unit {
  pub use uom::si::{length      ::{meter, millimeter, nanometer},
                    time        ::{second, microsecond, nanosecond, picosecond},
                    velocity    :: meter_per_second,
                    acceleration:: meter_per_second_squared,
                    area        :: square_meter,
                    energy      :: joule,
                    power       ::{watt, milliwatt},
                    frequency   :: hertz,
                    ratio       :: ratio,
                    angle       ::{degree, radian},
  };
}

/// Generate a function called NAME which returns QUANTITY by interpreting its
/// argument as UNIT
///
/// wrap!(NAME QUANTITY UNIT);
macro_rules! wrap {
  ($name:ident $quantity:ident $unit:ident ) => {
    pub fn $name(x: f64) -> $quantity { $quantity::new::<unit::$unit>(x) }
  };
}

/// The reverse of `wrap!`: a function called NAME which extracts the value of
/// QUANTITY expressed in UNIT
macro_rules! unwrap {
  ($name:ident $quantity:ident $unit:ident ) => {
    pub fn $name(x: $quantity) -> f64 { x.get::<unit::$unit>() }
  };
}

wrap!(m      Length                       meter);
wrap!(mm     Length                  millimeter);
wrap!(nm     Length                   nanometer);
wrap!(s      Time                        second);
wrap!(us     Time                   microsecond);
wrap!(ns     Time                    nanosecond);
wrap!(ps     Time                    picosecond);
wrap!(m_s    Velocity          meter_per_second);
wrap!(m_s2   Acceleration meter_per_second_squared);
wrap!(m2     Area                  square_meter);
wrap!(joule  Energy                       joule);
wrap!(watt   Power                         watt);
wrap!(mwatt  Power                    milliwatt);
wrap!(hertz  Frequency                    hertz);
wrap!(ratio  Ratio                        ratio);
wrap!(degree Angle                       degree);
wrap!(radian Angle                       radian);

unwrap!(m_      Length                       meter);
unwrap!(mm_     Length                  millimeter);
unwrap!(s_      Time                        second);
unwrap!(us_     Time                   microsecond);
unwrap!(ns_     Time                    nanosecond);
unwrap!(m_s_    Velocity          meter_per_second);
unwrap!(m2_     Area                  square_meter);
unwrap!(joule_  Energy                       joule);
unwrap!(watt_   Power                         watt);
unwrap!(hertz_  Frequency                    hertz);
unwrap!(ratio_  Ratio                        ratio);
unwrap!(degree_ Angle                       degree);
unwrap!(radian_ Angle                       radian);

/// Construct a quantity from a value given in SI base units. Usable in `const`
/// contexts, where the `wrap!` constructors are not.
#[macro_export]
macro_rules! in_base_unit {
  ($value:expr) => {
    $crate::Quantity {
      dimension: std::marker::PhantomData,
      units: std::marker::PhantomData,
      value: $value,
    }
  };
}

// The rounded value of c is deliberate: ToF bins are defined against it.
/// Speed of light
pub const C: Velocity = in_base_unit!(3e8);

/// Gravitational acceleration at the surface
pub const G: Acceleration = in_base_unit!(9.8);

/// Planck's constant in J s. `uom` has no convenient `Action` type, so this one
/// stays a bare float.
pub const PLANCK: f64 = 6.626e-34;

#[macro_export]
macro_rules! assert_uom_eq {
  ($unit:ident, $lhs:expr, $rhs:expr, $algo:ident <= $tol:expr) => {
    float_eq::assert_float_eq!($lhs.get::<$unit>(), $rhs.get::<$unit>(), $algo <= $tol)
  };
}
