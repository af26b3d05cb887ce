#![allow(dead_code)]

/// Compression pointer to offset 12, where the first question's name starts.
pub const PTR_FIRST_QUESTION: [u8; 2] = [0xC0, 0x0C];

/// Uncompressed wire form of `name`, written by hand so fixtures don't
/// depend on the codec under test.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
    buf
}

#[derive(Debug, Clone, Copy)]
pub enum Section {
    Answer,
    Authority,
    Additional,
}

/// Assembles raw response datagrams for parser tests.
///
/// Header counts follow what was added unless overridden with
/// [`ResponseBuilder::counts`].
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<u8>,
    question_count: u16,
    sections: [(Vec<u8>, u16); 3],
    count_override: Option<[u16; 4]>,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8180,
            questions: Vec::new(),
            question_count: 0,
            sections: [(Vec::new(), 0), (Vec::new(), 0), (Vec::new(), 0)],
            count_override: None,
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(self, name: &str, qtype: u16) -> Self {
        self.question_raw(&encode_name(name), qtype)
    }

    pub fn question_raw(mut self, owner: &[u8], qtype: u16) -> Self {
        self.questions.extend_from_slice(owner);
        self.questions.extend_from_slice(&qtype.to_be_bytes());
        self.questions.extend_from_slice(&1u16.to_be_bytes());
        self.question_count += 1;
        self
    }

    pub fn record(
        mut self,
        section: Section,
        owner: &[u8],
        rtype: u16,
        ttl: u32,
        rdata: &[u8],
    ) -> Self {
        let (buf, count) = &mut self.sections[section as usize];
        buf.extend_from_slice(owner);
        buf.extend_from_slice(&rtype.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&ttl.to_be_bytes());
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(rdata);
        *count += 1;
        self
    }

    pub fn answer_a(self, owner: &[u8], ttl: u32, addr: [u8; 4]) -> Self {
        self.record(Section::Answer, owner, 1, ttl, &addr)
    }

    pub fn counts(mut self, qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        self.count_override = Some([qd, an, ns, ar]);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let counts = self.count_override.unwrap_or([
            self.question_count,
            self.sections[0].1,
            self.sections[1].1,
            self.sections[2].1,
        ]);

        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        for count in counts {
            buf.extend_from_slice(&count.to_be_bytes());
        }
        buf.extend_from_slice(&self.questions);
        for (section, _) in &self.sections {
            buf.extend_from_slice(section);
        }
        buf
    }
}
