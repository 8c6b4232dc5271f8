use crate::model::{CatalogRecord, ExportError};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV with a UTF-8 BOM so spreadsheet apps pick the right encoding.
/// Header is taken from the record field names.
pub fn write_csv(records: &[CatalogRecord], path: &Path) -> Result<(), ExportError> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use std::fs;

    #[test]
    fn starts_with_bom_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = [CatalogRecord {
            id: 2,
            name: "PIANO ROYAL, от 61000 руб".into(),
            price: Some(61000),
            category: Category::Veneer,
            category_label: Category::Veneer.label().into(),
            image: "/works/IMG_5857.jpeg".into(),
            image_url: None,
            url: None,
        }];

        write_csv(&records, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,name,price,category,category_label,image,image_url,url")
        );
        assert_eq!(
            lines.next(),
            Some("2,\"PIANO ROYAL, от 61000 руб\",61000,veneer,Хиты продаж,/works/IMG_5857.jpeg,,")
        );
    }
}
