use basalt_dns_application::ZoneIndex;
use basalt_dns_domain::RecordEntry;
use basalt_dns_infrastructure::dns::ZoneRequestHandler;
use basalt_dns_infrastructure::zone::ZoneHandle;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;

fn entry(name: &str, rtype: &str, value: &str) -> RecordEntry {
    RecordEntry {
        name: name.to_string(),
        record_type: rtype.to_string(),
        value: value.to_string(),
        ttl: None,
    }
}

async fn spawn_server() -> SocketAddr {
    let zone = ZoneIndex::build(
        &[
            entry("example.com.", "A", "203.0.113.10"),
            entry("example.com.", "TXT", "v=spf1 -all"),
            entry("www.example.com.", "CNAME", "example.com."),
        ],
        300,
    )
    .unwrap();
    let handler = ZoneRequestHandler::new(Arc::new(ZoneHandle::new(zone)));

    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    let mut server = ServerFuture::new(handler);
    server.register_socket(socket);
    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });

    addr
}

async fn query(addr: SocketAddr, name: &str, rtype: RecordType) -> Message {
    let mut question = Query::new();
    question.set_name(Name::from_str(name).unwrap());
    question.set_query_type(rtype);
    question.set_query_class(DNSClass::IN);

    let mut message = Message::new(0x1234, MessageType::Query, OpCode::Query);
    message.add_query(question);

    let mut bytes = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut bytes);
    message.emit(&mut encoder).unwrap();

    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(&bytes, addr).await.unwrap();

    let mut buf = [0u8; 4096];
    let (n, _) = tokio::time::timeout(Duration::from_secs(5), client.recv_from(&mut buf))
        .await
        .expect("no response within timeout")
        .unwrap();
    Message::from_vec(&buf[..n]).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_udp_a_query_is_authoritative() {
    let addr = spawn_server().await;

    let response = query(addr, "example.com.", RecordType::A).await;
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.header().authoritative());
    assert!(!response.header().recursion_available());
    assert_eq!(response.answers().len(), 1);
    assert_eq!(response.answers()[0].record_type(), RecordType::A);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_udp_cname_query_carries_glue_in_additionals() {
    let addr = spawn_server().await;

    let response = query(addr, "www.example.com.", RecordType::CNAME).await;
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.answers().len(), 1);
    assert_eq!(response.answers()[0].record_type(), RecordType::CNAME);
    // Best-effort A glue for the CNAME target.
    assert_eq!(response.additionals().len(), 1);
    assert_eq!(response.additionals()[0].record_type(), RecordType::A);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_udp_unknown_name_is_nxdomain() {
    let addr = spawn_server().await;

    let response = query(addr, "unknown.example.com.", RecordType::A).await;
    assert_eq!(response.response_code(), ResponseCode::NXDomain);
    assert!(response.header().authoritative());
    assert!(response.answers().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_udp_known_name_missing_type_is_noerror_empty() {
    let addr = spawn_server().await;

    let response = query(addr, "example.com.", RecordType::AAAA).await;
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.answers().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_udp_unsupported_type_is_notimp() {
    let addr = spawn_server().await;

    let response = query(addr, "example.com.", RecordType::MX).await;
    assert_eq!(response.response_code(), ResponseCode::NotImp);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_udp_query_is_case_insensitive() {
    let addr = spawn_server().await;

    let response = query(addr, "EXAMPLE.COM.", RecordType::TXT).await;
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.answers().len(), 1);
}
