use crate::domain::model::{ContactBundle, EventRecord, PlaceRecord, ServiceRecord};
use crate::utils::error::{EtlError, Result};
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

const CONTACT_HEADERS: [&str; 5] = [
    "contact_phone",
    "contact_whatsapp",
    "contact_instagram",
    "contact_email",
    "website_url",
];

/// 攤平成 CSV 的一列；聯絡欄位固定放在最後
pub trait CsvRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
    fn contact(&self) -> &ContactBundle;
}

fn cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

fn contact_cells(contact: &ContactBundle) -> [String; 5] {
    [
        cell(&contact.contact_phone),
        cell(&contact.contact_whatsapp),
        cell(&contact.contact_instagram),
        cell(&contact.contact_email),
        cell(&contact.website_url),
    ]
}

impl CsvRow for EventRecord {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "city_id",
        "message_id",
        "title",
        "description",
        "date",
        "time",
        "location_name",
        "category",
        "price",
        "organizer_name",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.city_id.clone(),
            self.message_id.clone(),
            self.title.clone(),
            self.description.clone(),
            cell(&self.date),
            cell(&self.time),
            cell(&self.location_name),
            self.category.as_str().to_string(),
            cell(&self.price),
            cell(&self.organizer_name),
        ]
    }

    fn contact(&self) -> &ContactBundle {
        &self.contact
    }
}

impl CsvRow for PlaceRecord {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "city_id",
        "message_id",
        "name",
        "type",
        "category",
        "description",
        "location_name",
        "hours",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.city_id.clone(),
            self.message_id.clone(),
            self.name.clone(),
            self.place_type.as_str().to_string(),
            self.category.clone(),
            self.description.clone(),
            cell(&self.location_name),
            cell(&self.hours),
        ]
    }

    fn contact(&self) -> &ContactBundle {
        &self.contact
    }
}

impl CsvRow for ServiceRecord {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "city_id",
        "message_id",
        "title",
        "description",
        "category",
        "price_type",
        "price_amount",
        "price_currency",
        "price_notes",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.city_id.clone(),
            self.message_id.clone(),
            self.title.clone(),
            self.description.clone(),
            self.category.as_str().to_string(),
            self.price_type.as_str().to_string(),
            cell(&self.price_amount),
            cell(&self.price_currency),
            cell(&self.price_notes),
        ]
    }

    fn contact(&self) -> &ContactBundle {
        &self.contact
    }
}

/// 縮排過的 JSON，非 ASCII 字元原樣保留
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_string_pretty(value)?.into_bytes())
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

/// 紀錄沒有資料時仍然輸出表頭
pub fn records_to_csv<R: CsvRow>(records: &[R]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(R::HEADERS.iter().chain(CONTACT_HEADERS.iter()))?;

    for record in records {
        let mut row = record.cells();
        row.extend(contact_cells(record.contact()));
        writer.write_record(&row)?;
    }

    finish_csv(writer)
}

/// 可直接 serde 序列化的扁平結構
pub fn rows_to_csv<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    finish_csv(writer)
}

/// 把多個輸出檔打包成一個 ZIP
pub fn bundle_zip(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    for (name, data) in entries {
        zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
        zip.write_all(data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Currency, PriceType, ServiceCategory};
    use std::io::Read;
    use uuid::Uuid;

    fn service() -> ServiceRecord {
        ServiceRecord {
            id: Uuid::nil(),
            city_id: "mazunte".to_string(),
            message_id: "m1".to_string(),
            title: "Masaje, relajante".to_string(),
            description: "Masaje, relajante $500 MXN".to_string(),
            category: ServiceCategory::Wellness,
            price_type: PriceType::Fixed,
            price_amount: Some(500.0),
            price_currency: Some(Currency::Mxn),
            price_notes: Some("$500 MXN".to_string()),
            contact: ContactBundle {
                contact_whatsapp: Some("9581112233".to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_records_to_csv_flattens_contact_columns() {
        let csv_bytes = records_to_csv(&[service()]).unwrap();
        let mut reader = csv::Reader::from_reader(csv_bytes.as_slice());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), ServiceRecord::HEADERS.len() + 5);
        assert_eq!(&headers[headers.len() - 1], "website_url");

        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[3], "Masaje, relajante");
        assert_eq!(&row[7], "500");
        assert_eq!(&row[8], "MXN");
        assert_eq!(&row[11], "9581112233");
        assert_eq!(&row[12], "");
    }

    #[test]
    fn test_empty_records_still_write_headers() {
        let csv_bytes = records_to_csv::<EventRecord>(&[]).unwrap();
        let text = String::from_utf8(csv_bytes).unwrap();
        assert!(text.starts_with("id,city_id,message_id,title"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_pretty_json_keeps_non_ascii() {
        let bytes = to_pretty_json(&vec!["Mañana en la playa"]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Mañana"));
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_bundle_zip_contains_every_entry() {
        let entries = vec![
            ("events.json".to_string(), b"[]".to_vec()),
            ("places.json".to_string(), b"[]".to_vec()),
        ];
        let data = bundle_zip(&entries).unwrap();

        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(data)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut content = String::new();
        archive
            .by_name("places.json")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "[]");
    }
}
