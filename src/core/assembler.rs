use crate::core::categorize::{categorize_event, categorize_place, categorize_service};
use crate::core::classify::{is_event, is_place, is_service};
use crate::domain::model::{
    ContactBundle, EventRecord, ExtractionOutput, Message, PlaceRecord, PriceType, ServiceRecord,
};
use crate::domain::ports::Clock;
use crate::extract::{
    extract_contact_info, extract_date, extract_location, extract_organizer, extract_price,
    extract_time, truncate_chars,
};
use uuid::Uuid;

pub const DEFAULT_REGION: &str = "mazunte";
pub const DEFAULT_MIN_MESSAGE_LENGTH: usize = 10;
const TITLE_MAX_CHARS: usize = 100;
const PLACE_NAME_MAX_CHARS: usize = 50;

/// 單則訊息產生的紀錄（每種最多一筆）
#[derive(Debug, Clone, Default)]
pub struct MessageRecords {
    pub event: Option<EventRecord>,
    pub place: Option<PlaceRecord>,
    pub service: Option<ServiceRecord>,
}

#[derive(Debug, Clone)]
pub enum MessageOutcome {
    /// 文字太短，直接略過
    Skipped,
    /// 三個分類器都沒命中
    Unclassified,
    Records(MessageRecords),
}

pub struct RecordAssembler<C: Clock> {
    region: String,
    min_message_length: usize,
    clock: C,
}

impl<C: Clock> RecordAssembler<C> {
    pub fn new(region: impl Into<String>, clock: C) -> Self {
        Self {
            region: region.into(),
            min_message_length: DEFAULT_MIN_MESSAGE_LENGTH,
            clock,
        }
    }

    pub fn with_min_message_length(mut self, min_message_length: usize) -> Self {
        self.min_message_length = min_message_length;
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn assemble_message(&self, message: &Message) -> MessageOutcome {
        let text = message.text();
        if text.chars().count() < self.min_message_length {
            return MessageOutcome::Skipped;
        }

        let (event, place, service) = (is_event(text), is_place(text), is_service(text));
        if !(event || place || service) {
            return MessageOutcome::Unclassified;
        }

        // 聯絡資訊只擷取一次，三種紀錄共用
        let contact = extract_contact_info(text);

        MessageOutcome::Records(MessageRecords {
            event: event.then(|| self.build_event(message, text, &contact)),
            place: place.then(|| self.build_place(message, text, &contact)),
            service: service.then(|| self.build_service(message, text, &contact)),
        })
    }

    pub fn assemble_all(&self, messages: &[Message]) -> ExtractionOutput {
        let mut output = ExtractionOutput::default();

        for message in messages {
            output.stats.messages_seen += 1;
            match self.assemble_message(message) {
                MessageOutcome::Skipped => {
                    output.stats.messages_skipped += 1;
                }
                MessageOutcome::Unclassified => {
                    tracing::trace!("Message {} matched no classifier", message.id);
                    output.stats.messages_unclassified += 1;
                }
                MessageOutcome::Records(records) => {
                    output.events.extend(records.event);
                    output.places.extend(records.place);
                    output.services.extend(records.service);
                }
            }
        }

        output
    }

    fn build_event(&self, message: &Message, text: &str, contact: &ContactBundle) -> EventRecord {
        EventRecord {
            id: Uuid::new_v4(),
            city_id: self.region.clone(),
            message_id: message.id.clone(),
            title: truncate_chars(text, TITLE_MAX_CHARS),
            description: text.to_string(),
            date: extract_date(text, &self.clock),
            time: extract_time(text),
            location_name: extract_location(text),
            category: categorize_event(text),
            price: extract_price(text).map(|p| p.display),
            organizer_name: extract_organizer(text),
            contact: contact.clone(),
        }
    }

    fn build_place(&self, message: &Message, text: &str, contact: &ContactBundle) -> PlaceRecord {
        let (place_type, label) = categorize_place(text);
        let location_name = extract_location(text);

        PlaceRecord {
            id: Uuid::new_v4(),
            city_id: self.region.clone(),
            message_id: message.id.clone(),
            name: location_name
                .clone()
                .unwrap_or_else(|| truncate_chars(text, PLACE_NAME_MAX_CHARS)),
            place_type,
            category: label.to_string(),
            description: text.to_string(),
            location_name,
            hours: None,
            contact: contact.clone(),
        }
    }

    fn build_service(&self, message: &Message, text: &str, contact: &ContactBundle) -> ServiceRecord {
        let price = extract_price(text);
        // 金額為 0（例如 Free）視為可議價
        let price_type = match &price {
            Some(p) if p.amount != 0.0 => PriceType::Fixed,
            _ => PriceType::Negotiable,
        };

        ServiceRecord {
            id: Uuid::new_v4(),
            city_id: self.region.clone(),
            message_id: message.id.clone(),
            title: truncate_chars(text, TITLE_MAX_CHARS),
            description: text.to_string(),
            category: categorize_service(text),
            price_type,
            price_amount: price.as_ref().map(|p| p.amount),
            price_currency: price.as_ref().and_then(|p| p.currency),
            price_notes: price.map(|p| p.display),
            contact: contact.clone(),
        }
    }
}
