use crate::dns::codec::RecordCodec;
use crate::zone::ZoneHandle;
use basalt_dns_application::Resolver;
use basalt_dns_domain::Question;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Serves every request from the current zone snapshot. The handle is the
/// only shared state; each request takes a cheap snapshot so in-flight
/// queries are unaffected by a concurrent reload.
#[derive(Clone)]
pub struct ZoneRequestHandler {
    zones: Arc<ZoneHandle>,
}

impl ZoneRequestHandler {
    pub fn new(zones: Arc<ZoneHandle>) -> Self {
        Self { zones }
    }
}

#[async_trait::async_trait]
impl RequestHandler for ZoneRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let qname = query.name().to_utf8();
        let hickory_qtype = query.query_type();
        let client = request.src().ip();

        debug!(name = %qname, query_type = ?hickory_qtype, client = %client, "DNS query received");

        let qtype = match RecordCodec::query_type(hickory_qtype) {
            Some(qtype) => qtype,
            None => {
                warn!(query_type = ?hickory_qtype, "Unsupported query type");
                return send_error_response(request, &mut response_handle, ResponseCode::NotImp)
                    .await;
            }
        };

        let question = Question::new(&qname, qtype);
        let resolver = Resolver::new(self.zones.current());
        let result = resolver.resolve(&question);

        let answers: Vec<Record> = result.answers.iter().filter_map(RecordCodec::to_wire).collect();
        let additionals: Vec<Record> = result
            .additional
            .iter()
            .filter_map(RecordCodec::to_wire)
            .collect();

        debug!(
            name = %question.name,
            status = ?result.status,
            answers = answers.len(),
            additionals = additionals.len(),
            "Sending authoritative response"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let header = authoritative_header(request, RecordCodec::response_code(result.status));
        let response = builder.build(header, answers.iter(), &[], &[], additionals.iter());

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

/// AA is always set and RA never is: this server only speaks for its own
/// static zone.
fn authoritative_header(request: &Request, code: ResponseCode) -> Header {
    let mut header = *request.header();
    header.set_authoritative(true);
    header.set_recursion_available(false);
    header.set_response_code(code);
    header
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let header = authoritative_header(request, code);
    let response = builder.build(header, &[], &[] as &[Record], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
