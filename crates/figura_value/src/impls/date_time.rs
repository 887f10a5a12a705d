use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::impls::TypeDescCell;
use crate::info::{TypeDesc, TypePath, TypeShape, Typed};
use crate::{Literal, OpaqueValue, Repr, Value};

/// The path date-times are declared with.
pub const TIME_PATH: TypePath = TypePath::from_static("time", "Time");

fn time_desc() -> TypeDesc {
    static CELL: TypeDescCell = TypeDescCell::new();
    CELL.get_or_init(|| TypeDesc::named(TIME_PATH, TypeShape::Opaque))
}

// The payload is always normalized to UTC.
fn time_value(utc: DateTime<Utc>) -> Value {
    Value::new_unchecked(time_desc(), Repr::Opaque(OpaqueValue::new(utc)))
}

impl<Tz: TimeZone + 'static> Typed for DateTime<Tz> {
    #[inline]
    fn type_desc() -> TypeDesc {
        time_desc()
    }
}

impl<Tz: TimeZone + 'static> Literal for DateTime<Tz> {
    fn to_value(&self) -> Value {
        time_value(self.with_timezone(&Utc))
    }
}

/// A naive date-time is taken to be in UTC.
impl Typed for NaiveDateTime {
    #[inline]
    fn type_desc() -> TypeDesc {
        time_desc()
    }
}

impl Literal for NaiveDateTime {
    fn to_value(&self) -> Value {
        time_value(self.and_utc())
    }
}
