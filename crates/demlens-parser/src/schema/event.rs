use serde::{Serialize, Serializer};

use demlens_core::proto::net::{CsvcMsgGameEventDescriptor, CsvcMsgGameEventKey};

/// Declared type of one event field (wire tags 1..=7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFieldType {
    String,
    Float,
    Long,
    Short,
    Byte,
    Bool,
    Uint64,
}

impl EventFieldType {
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            1 => Some(EventFieldType::String),
            2 => Some(EventFieldType::Float),
            3 => Some(EventFieldType::Long),
            4 => Some(EventFieldType::Short),
            5 => Some(EventFieldType::Byte),
            6 => Some(EventFieldType::Bool),
            7 => Some(EventFieldType::Uint64),
            _ => None,
        }
    }

    /// Pick the accessor this type selects.
    pub fn read(self, key: &CsvcMsgGameEventKey) -> Result<EventValue, String> {
        Ok(match self {
            EventFieldType::String => EventValue::String(key.val_string.clone()),
            EventFieldType::Float => EventValue::Float(key.val_float),
            EventFieldType::Long => EventValue::Long(key.val_long),
            EventFieldType::Short => EventValue::Short(
                i16::try_from(key.val_short)
                    .map_err(|_| format!("short value {} out of range", key.val_short))?,
            ),
            EventFieldType::Byte => EventValue::Byte(
                u8::try_from(key.val_byte)
                    .map_err(|_| format!("byte value {} out of range", key.val_byte))?,
            ),
            EventFieldType::Bool => EventValue::Bool(key.val_bool),
            EventFieldType::Uint64 => EventValue::Uint64(key.val_uint64),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventField {
    pub name: String,
    pub ty: EventFieldType,
}

/// Schema entry: event name plus its ordered, typed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub event_id: i32,
    pub name: String,
    pub fields: Vec<EventField>,
}

impl EventDescriptor {
    /// Convert a wire descriptor. Fails with the offending type tag.
    pub fn from_wire(d: &CsvcMsgGameEventDescriptor) -> Result<Self, i32> {
        let fields = d
            .keys
            .iter()
            .map(|k| {
                EventFieldType::from_tag(k.r#type)
                    .map(|ty| EventField {
                        name: k.name.clone(),
                        ty,
                    })
                    .ok_or(k.r#type)
            })
            .collect::<Result<Vec<_>, i32>>()?;

        Ok(Self {
            event_id: d.eventid,
            name: d.name.clone(),
            fields,
        })
    }
}

/// One typed field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventValue {
    String(String),
    Float(f32),
    Long(i64),
    Short(i16),
    Byte(u8),
    Bool(bool),
    Uint64(u64),
}

/// Event record typed through its descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameEvent {
    /// Tick of the enclosing outer frame.
    pub tick: u64,
    pub event_id: i32,
    pub name: String,
    /// Field values in descriptor order.
    #[serde(serialize_with = "fields_as_map")]
    pub fields: Vec<(String, EventValue)>,
}

impl GameEvent {
    pub fn get(&self, field: &str) -> Option<&EventValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, v)| v)
    }
}

fn fields_as_map<S: Serializer>(fields: &[(String, EventValue)], s: S) -> Result<S::Ok, S::Error> {
    s.collect_map(fields.iter().map(|(k, v)| (k, v)))
}
