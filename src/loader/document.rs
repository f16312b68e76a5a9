// Copyright (c) 2025 - Cowboy AI, Inc.
//! Raw Rack Description Document
//!
//! The loosely-typed input shape, before any cross-referencing:
//!
//! ```yaml
//! version: 1
//! servers: { device_name: serial }
//! switches: { device_name: serial }
//! racks: { rack_name: { rack_slot: device_name } }
//! connections: { rack_name: [ [slot1, port1, slot2, port2], ... ] }
//! ```
//!
//! Deserializing into [`TopologyDocument`] is the shape check. It fails on
//! the first structural problem, since none of the later passes can run on a
//! document with the wrong shape. Maps keep document order so that later
//! validation errors come out in the order the author wrote things.

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::domain::{Port, RackSlot, Serial};
use crate::errors::TopologyResult;

/// Supported document format version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Version(i64);

impl Version {
    pub const CURRENT: i64 = 1;
}

impl Default for Version {
    fn default() -> Self {
        Self(Self::CURRENT)
    }
}

impl TryFrom<i64> for Version {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value != Self::CURRENT {
            return Err(format!("not a valid value: version must be {}", Self::CURRENT));
        }
        Ok(Self(value))
    }
}

impl From<Version> for i64 {
    fn from(version: Version) -> Self {
        version.0
    }
}

/// One cable as written in the document: `[slot1, port1, slot2, port2]`
///
/// Ordering is by the raw tuple, which gives the stable processing order
/// used when resolving connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CableRow(pub RackSlot, pub Port, pub RackSlot, pub Port);

impl CableRow {
    pub fn a(&self) -> (RackSlot, Port) {
        (self.0, self.1)
    }

    pub fn b(&self) -> (RackSlot, Port) {
        (self.2, self.3)
    }
}

/// A rack description exactly as written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopologyDocument {
    pub version: Version,
    #[serde(deserialize_with = "section")]
    pub servers: IndexMap<String, Serial>,
    #[serde(deserialize_with = "section")]
    pub switches: IndexMap<String, Serial>,
    #[serde(deserialize_with = "rack_sections")]
    pub racks: IndexMap<String, IndexMap<RackSlot, String>>,
    #[serde(deserialize_with = "section")]
    pub connections: IndexMap<String, Vec<CableRow>>,
}

/// A mapping that must be present, non-null and free of repeated keys
///
/// YAML loaders accept `servers:` with no value as null and keep the last of
/// two equal keys; both would silently drop part of the description.
struct Section<K, V>(IndexMap<K, V>);

struct Entries<K, V>(IndexMap<K, V>);

impl<'de, K, V> Deserialize<'de> for Entries<K, V>
where
    K: Deserialize<'de> + Hash + Eq + fmt::Display,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K, V> Visitor<'de> for EntriesVisitor<K, V>
        where
            K: Deserialize<'de> + Hash + Eq + fmt::Display,
            V: Deserialize<'de>,
        {
            type Value = Entries<K, V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<K, V>()? {
                    if entries.contains_key(&key) {
                        return Err(de::Error::custom(format_args!(
                            "duplicate entry with key `{key}`"
                        )));
                    }
                    entries.insert(key, value);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl<'de, K, V> Deserialize<'de> for Section<K, V>
where
    K: Deserialize<'de> + Hash + Eq + fmt::Display,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Entries<K, V>>::deserialize(deserializer)? {
            Some(Entries(entries)) => Ok(Section(entries)),
            None => Err(de::Error::invalid_type(Unexpected::Unit, &"a mapping")),
        }
    }
}

fn section<'de, D, K, V>(deserializer: D) -> Result<IndexMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de> + Hash + Eq + fmt::Display,
    V: Deserialize<'de>,
{
    Section::deserialize(deserializer).map(|Section(entries)| entries)
}

fn rack_sections<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, IndexMap<RackSlot, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Section(racks) = Section::<String, Section<RackSlot, String>>::deserialize(deserializer)?;
    Ok(racks
        .into_iter()
        .map(|(name, Section(slots))| (name, slots))
        .collect())
}

impl TopologyDocument {
    /// Parse and shape-check a YAML document
    pub fn from_yaml(source: &str) -> TopologyResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}
