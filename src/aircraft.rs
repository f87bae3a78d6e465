use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tabled::Tabled;

pub type PlaneId = Arc<str>;

/// Capability an airport needs from anything it lands or launches.
pub trait Plane {
    fn id(&self) -> &PlaneId;
    fn ground(&mut self);
    fn take_flight(&mut self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneStatus {
    #[default]
    Flying,
    Landed,
}

impl fmt::Display for PlaneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneStatus::Flying => write!(f, "flying"),
            PlaneStatus::Landed => write!(f, "landed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Aircraft {
    pub id: PlaneId,
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_deserializing)]
    status: PlaneStatus,
}

impl Aircraft {
    pub fn new(id: impl Into<PlaneId>) -> Self {
        Aircraft {
            id: id.into(),
            model: String::new(),
            status: PlaneStatus::Flying,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn status(&self) -> PlaneStatus {
        self.status
    }
}

impl Plane for Aircraft {
    fn id(&self) -> &PlaneId {
        &self.id
    }

    fn ground(&mut self) {
        self.status = PlaneStatus::Landed;
    }

    fn take_flight(&mut self) {
        self.status = PlaneStatus::Flying;
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
