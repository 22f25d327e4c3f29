use recordkit_model::{Model, Record};

/// Minimal concrete record kind for discriminator tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    record: Record,
}

impl User {
    pub fn new(email: &str) -> Self {
        let mut record = Record::new();
        record.set("email", email).expect("email");
        Self { record }
    }

    pub fn email(&self) -> Option<&str> {
        self.record.get("email").and_then(|value| value.as_str())
    }
}

impl Model for User {
    const TYPE_NAME: &'static str = "User";

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn from_record(record: Record) -> Self {
        Self { record }
    }
}
