use basalt_dns_domain::{ConfigError, DomainName, RecordData, RecordType, ResourceRecord};
use std::net::Ipv4Addr;
use std::str::FromStr;

#[test]
fn test_record_type_from_str_is_case_insensitive() {
    assert_eq!(RecordType::from_str("a").unwrap(), RecordType::A);
    assert_eq!(RecordType::from_str("Aaaa").unwrap(), RecordType::AAAA);
    assert_eq!(RecordType::from_str("PTR").unwrap(), RecordType::PTR);
}

#[test]
fn test_record_type_from_str_rejects_unknown() {
    assert!(RecordType::from_str("MX").is_err());
    assert!(RecordType::from_str("SOA").is_err());
    assert!(RecordType::from_str("").is_err());
}

#[test]
fn test_any_order_precedence() {
    assert_eq!(
        RecordType::ANY_ORDER,
        [
            RecordType::A,
            RecordType::AAAA,
            RecordType::CNAME,
            RecordType::TXT,
            RecordType::NS,
            RecordType::PTR,
        ]
    );
}

#[test]
fn test_parse_a_value() {
    let data = RecordData::parse(RecordType::A, "203.0.113.10").unwrap();
    assert_eq!(data, RecordData::A(Ipv4Addr::new(203, 0, 113, 10)));
    assert_eq!(data.record_type(), RecordType::A);
}

#[test]
fn test_parse_a_rejects_non_ipv4() {
    let err = RecordData::parse(RecordType::A, "not-an-ip").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            rtype: RecordType::A,
            ..
        }
    ));
    // An IPv6 literal is not a valid A value either.
    assert!(RecordData::parse(RecordType::A, "2001:db8::1").is_err());
}

#[test]
fn test_parse_aaaa_value() {
    let data = RecordData::parse(RecordType::AAAA, "2001:db8::1").unwrap();
    assert_eq!(data.record_type(), RecordType::AAAA);
    assert!(RecordData::parse(RecordType::AAAA, "203.0.113.10").is_err());
}

#[test]
fn test_parse_cname_value_is_validated_fqdn() {
    let data = RecordData::parse(RecordType::CNAME, "Target.Example.Com.").unwrap();
    assert_eq!(
        data,
        RecordData::Cname(DomainName::parse("target.example.com.").unwrap())
    );
    assert!(RecordData::parse(RecordType::CNAME, "no-trailing-dot.example.com").is_err());
}

#[test]
fn test_parse_ns_and_ptr_values() {
    assert!(RecordData::parse(RecordType::NS, "ns1.example.com.").is_ok());
    assert!(RecordData::parse(RecordType::PTR, "host.example.com.").is_ok());
    assert!(RecordData::parse(RecordType::NS, "").is_err());
}

#[test]
fn test_parse_txt_value() {
    let data = RecordData::parse(RecordType::TXT, "v=spf1 -all").unwrap();
    assert_eq!(data, RecordData::Txt("v=spf1 -all".to_string()));
}

#[test]
fn test_parse_txt_rejects_oversized_value() {
    let long = "x".repeat(256);
    assert!(RecordData::parse(RecordType::TXT, &long).is_err());
    let max = "x".repeat(255);
    assert!(RecordData::parse(RecordType::TXT, &max).is_ok());
}

#[test]
fn test_resource_record_rtype() {
    let rr = ResourceRecord::new(
        DomainName::parse("example.com.").unwrap(),
        RecordData::parse(RecordType::TXT, "hello").unwrap(),
        60,
    );
    assert_eq!(rr.rtype(), RecordType::TXT);
    assert_eq!(rr.ttl, 60);
}
