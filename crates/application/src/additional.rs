use crate::zone::ZoneIndex;
use basalt_dns_domain::{DomainName, RecordData, RecordType, ResourceRecord};
use std::collections::HashSet;

/// Best-effort glue: A then AAAA records for every CNAME and NS target in
/// the answer set, deduplicated by (name, type, value) and skipping
/// records already present in the answers. Absence of glue is a normal
/// outcome, not an error.
pub fn assemble(zone: &ZoneIndex, answers: &[ResourceRecord]) -> Vec<ResourceRecord> {
    let mut seen: HashSet<(DomainName, RecordData)> = answers
        .iter()
        .map(|rr| (rr.name.clone(), rr.data.clone()))
        .collect();

    let mut additional = Vec::new();
    for answer in answers {
        let target = match &answer.data {
            RecordData::Cname(target) | RecordData::Ns(target) => target,
            _ => continue,
        };
        for rtype in [RecordType::A, RecordType::AAAA] {
            for rr in zone.find(target, rtype) {
                if seen.insert((rr.name.clone(), rr.data.clone())) {
                    additional.push(rr.clone());
                }
            }
        }
    }
    additional
}
