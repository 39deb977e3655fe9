use basalt_dns_domain::{
    ConfigError, DomainName, RecordData, RecordEntry, RecordType, ResourceRecord,
};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use tracing::info;

/// Query-optimized index of every configured record.
///
/// Built once from raw config entries, then read-only: the primary map
/// answers `(name, type)` lookups in insertion order, the name set
/// distinguishes "name unknown" from "name known, type absent".
#[derive(Debug)]
pub struct ZoneIndex {
    by_key: HashMap<(DomainName, RecordType), Vec<ResourceRecord>>,
    names: HashSet<DomainName>,
    record_count: usize,
}

impl ZoneIndex {
    /// Validate and index raw record entries. Fails on the first malformed
    /// entry; a partial zone is never produced.
    pub fn build(entries: &[RecordEntry], default_ttl: i64) -> Result<Self, ConfigError> {
        if default_ttl < 0 {
            return Err(ConfigError::NegativeTtl(default_ttl));
        }
        let default_ttl = ttl_in_range(default_ttl)?;

        let mut by_key: HashMap<(DomainName, RecordType), Vec<ResourceRecord>> = HashMap::new();
        let mut names = HashSet::new();

        for (i, entry) in entries.iter().enumerate() {
            let record = parse_entry(entry, default_ttl).map_err(|e| e.at_record(i + 1))?;
            names.insert(record.name.clone());
            by_key
                .entry((record.name.clone(), record.rtype()))
                .or_default()
                .push(record);
        }

        info!(records = entries.len(), "zone index built");

        Ok(Self {
            by_key,
            names,
            record_count: entries.len(),
        })
    }

    /// All records for the exact `(name, type)` pair, in insertion order.
    pub fn find(&self, name: &DomainName, rtype: RecordType) -> &[ResourceRecord] {
        self.by_key
            .get(&(name.clone(), rtype))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the name carries records of any type.
    pub fn name_exists(&self, name: &DomainName) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

fn parse_entry(entry: &RecordEntry, default_ttl: u32) -> Result<ResourceRecord, ConfigError> {
    let rtype = RecordType::from_str(&entry.record_type)
        .map_err(|_| ConfigError::UnsupportedType(entry.record_type.clone()))?;
    let name = DomainName::parse(&entry.name)?;
    let data = RecordData::parse(rtype, &entry.value)?;
    let ttl = match entry.ttl {
        Some(ttl) if ttl < 0 => return Err(ConfigError::NegativeTtl(ttl)),
        Some(ttl) => ttl_in_range(ttl)?,
        None => default_ttl,
    };
    Ok(ResourceRecord::new(name, data, ttl))
}

fn ttl_in_range(ttl: i64) -> Result<u32, ConfigError> {
    u32::try_from(ttl).map_err(|_| ConfigError::Validation(format!("TTL {} out of range", ttl)))
}
