//! dig-style rendering of a lookup result.

use chrono::{DateTime, Local};
use ferrous_lookup_domain::{Header, RecordClass, RecordType, ResourceRecord};
use ferrous_lookup_infrastructure::dns::forwarding::LookupResponse;
use std::fmt::Write;

pub fn render(response: &LookupResponse, when: DateTime<Local>) -> String {
    let message = &response.message;
    let header = &message.header;
    let mut out = String::new();

    let _ = writeln!(
        out,
        ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
        header.opcode(),
        header.response_code(),
        header.id
    );
    let _ = writeln!(
        out,
        ";; flags:{}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
        flag_list(header),
        header.question_count,
        header.answer_count,
        header.authority_count,
        header.additional_count
    );

    out.push_str("\n;; QUESTION SECTION:\n");
    for question in &message.questions {
        let _ = writeln!(
            out,
            ";{}\t\t\t{}\t{}",
            fqdn(&question.name),
            RecordClass::from_u16(question.qclass),
            RecordType::mnemonic(question.qtype)
        );
    }

    render_section(&mut out, "ANSWER", &message.answers);
    render_section(&mut out, "AUTHORITY", &message.authorities);
    render_section(&mut out, "ADDITIONAL", &message.additionals);

    let _ = writeln!(out, "\n;; Query time: {} msec", response.elapsed.as_millis());
    let _ = writeln!(
        out,
        ";; SERVER: {}#{}({})",
        response.server.ip(),
        response.server.port(),
        response.server.ip()
    );
    let _ = writeln!(out, ";; WHEN: {}", when.format("%a %b %d %H:%M:%S %Z %Y"));
    let _ = writeln!(out, ";; MSG SIZE  rcvd: {}", response.response_size);

    out
}

fn flag_list(header: &Header) -> String {
    [
        (header.is_response(), "qr"),
        (header.authoritative(), "aa"),
        (header.truncated(), "tc"),
        (header.recursion_desired(), "rd"),
        (header.recursion_available(), "ra"),
    ]
    .into_iter()
    .filter(|(set, _)| *set)
    .map(|(_, name)| format!(" {}", name))
    .collect()
}

fn render_section(out: &mut String, title: &str, records: &[ResourceRecord]) {
    if records.is_empty() {
        return;
    }

    let _ = writeln!(out, "\n;; {} SECTION:", title);
    for record in records {
        let _ = writeln!(
            out,
            "{}\t\t{}\t{}\t{}\t{}",
            fqdn(&record.name),
            record.ttl,
            record.record_class(),
            RecordType::mnemonic(record.rtype),
            record.data
        );
    }
}

fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
