use crate::model::{CatalogRecord, ExportError};
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub const HEADERS: [&str; 8] = [
    "id",
    "name",
    "price",
    "category",
    "category_label",
    "image",
    "image_url",
    "url",
];

pub fn write_xlsx(records: &[CatalogRecord], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Catalog")?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_number(row, 0, record.id)?;
        sheet.write_string(row, 1, &record.name)?;
        if let Some(price) = record.price {
            sheet.write_number(row, 2, price)?;
        }
        sheet.write_string(row, 3, record.category.key())?;
        sheet.write_string(row, 4, &record.category_label)?;
        sheet.write_string(row, 5, &record.image)?;
        if let Some(image_url) = &record.image_url {
            sheet.write_string(row, 6, image_url)?;
        }
        if let Some(url) = &record.url {
            sheet.write_string(row, 7, url)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use calamine::{Data, Reader, Xlsx, open_workbook};

    fn record(id: u32, name: &str, price: Option<u32>, category: Category) -> CatalogRecord {
        CatalogRecord {
            id,
            name: name.into(),
            price,
            category,
            category_label: category.label().into(),
            image: format!("/works/IMG_{}.jpeg", 5855 + id % 7),
            image_url: None,
            url: Some(format!("https://labirintdoors.ru/katalog2/{id}/")),
        }
    }

    #[test]
    fn workbook_has_catalog_sheet_with_typed_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let records = [
            record(1, "Входная дверь NORD", Some(52000), Category::Thermo),
            record(2, "PIANO ROYAL", None, Category::Veneer),
        ];

        write_xlsx(&records, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Catalog".to_string()]);
        let range = workbook.worksheet_range("Catalog").unwrap();

        for (col, header) in HEADERS.iter().enumerate() {
            assert_eq!(range.get_value((0, col as u32)), Some(&Data::String(header.to_string())));
        }

        assert_eq!(range.get_value((1, 0)), Some(&Data::Float(1.0)));
        assert_eq!(range.get_value((1, 1)), Some(&Data::String("Входная дверь NORD".into())));
        assert_eq!(range.get_value((1, 2)), Some(&Data::Float(52000.0)));
        assert_eq!(range.get_value((1, 3)), Some(&Data::String("thermo".into())));
        assert_eq!(range.get_value((1, 4)), Some(&Data::String("С терморазрывом".into())));
        assert_eq!(range.get_value((1, 5)), Some(&Data::String("/works/IMG_5856.jpeg".into())));
        assert_eq!(range.get_value((1, 6)), Some(&Data::Empty));
        assert_eq!(
            range.get_value((1, 7)),
            Some(&Data::String("https://labirintdoors.ru/katalog2/1/".into()))
        );

        assert_eq!(range.get_value((2, 0)), Some(&Data::Float(2.0)));
        assert_eq!(range.get_value((2, 2)), Some(&Data::Empty));
        assert_eq!(range.get_value((2, 3)), Some(&Data::String("veneer".into())));
        assert_eq!(range.height(), 3);
    }
}
