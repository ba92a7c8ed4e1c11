use std::ops::Deref;

use hookfeed_models::EventType;
use sqlx::{
    postgres::{PgTypeInfo, PgValueRef},
    Decode, Postgres, Type,
};

pub struct EventTypeDecode(EventType);
impl<'r> Decode<'r, Postgres> for EventTypeDecode {
    fn decode(value: PgValueRef) -> core::result::Result<Self, sqlx::error::BoxDynError> {
        let str_value = <&str as Decode<Postgres>>::decode(value)?;
        Ok(Self(EventType::from(str_value)))
    }
}

impl Type<Postgres> for EventTypeDecode {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("varchar")
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl Deref for EventTypeDecode {
    type Target = EventType;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<EventTypeDecode> for EventType {
    fn from(v: EventTypeDecode) -> Self {
        v.0
    }
}
