use std::collections::HashMap;

use demlens_core::error::{DemError, Result};
use demlens_core::proto::net::{CsvcMsgGameEvent, CsvcMsgGameEventList};

use super::event::{EventDescriptor, GameEvent};

/// Outcome of installing one event list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: usize,
    /// (event id, type tag) for descriptors left out.
    pub rejected: Vec<(i32, i32)>,
}

/// `event_id -> descriptor`, replaced wholesale by each event list.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    descriptors: HashMap<i32, EventDescriptor>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table with the descriptors of `list`.
    ///
    /// The new table is built first and swapped in at once; descriptors with
    /// an unknown field type tag are not installed.
    pub fn install(&mut self, list: &CsvcMsgGameEventList) -> InstallReport {
        let mut table = HashMap::with_capacity(list.descriptors.len());
        let mut rejected = Vec::new();

        for d in &list.descriptors {
            match EventDescriptor::from_wire(d) {
                Ok(desc) => {
                    table.insert(desc.event_id, desc);
                }
                Err(tag) => rejected.push((d.eventid, tag)),
            }
        }

        let installed = table.len();
        self.descriptors = table;
        InstallReport { installed, rejected }
    }

    pub fn get(&self, event_id: i32) -> Option<&EventDescriptor> {
        self.descriptors.get(&event_id)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn clear(&mut self) {
        self.descriptors.clear();
    }

    /// Zip the record's keys against its descriptor's fields by index.
    pub fn resolve(&self, event: &CsvcMsgGameEvent, tick: u64) -> Result<GameEvent> {
        let event_id = event.eventid;
        let desc = self
            .get(event_id)
            .ok_or(DemError::UnknownEventSchema(event_id))?;

        if event.keys.len() > desc.fields.len() {
            return Err(DemError::EventFieldMismatch {
                event_id,
                reason: format!(
                    "{} keys for {} declared fields",
                    event.keys.len(),
                    desc.fields.len()
                ),
            });
        }

        let fields = desc
            .fields
            .iter()
            .zip(&event.keys)
            .map(|(field, key)| {
                let value = field.ty.read(key).map_err(|reason| DemError::EventFieldMismatch {
                    event_id,
                    reason: format!("field {}: {reason}", field.name),
                })?;
                Ok((field.name.clone(), value))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GameEvent {
            tick,
            event_id,
            name: desc.name.clone(),
            fields,
        })
    }
}
