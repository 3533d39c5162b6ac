use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }
    };
}

string_id!(PlayerId);
string_id!(PeriodId);
string_id!(SlotId);
string_id!(PlanId);

impl SlotId {
    pub fn generate() -> Self {
        SlotId(Uuid::new_v4().to_string())
    }
}

impl PeriodId {
    pub fn generate() -> Self {
        PeriodId(Uuid::new_v4().to_string())
    }
}

impl PlanId {
    pub fn generate() -> Self {
        PlanId(Uuid::new_v4().to_string())
    }
}
