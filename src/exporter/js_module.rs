// Front-end data module (`export const catalogData = {...}`)
use crate::config::ModuleConfig;
use crate::model::{CatalogRecord, Category, ExportError};
use std::fs;
use std::path::Path;

/// Category list as the front-end expects it: `all` first, then the catalog sections.
const MODULE_CATEGORIES: [(&str, &str); 6] = [
    ("all", "Все двери"),
    ("invisible", "Новинки 2025"),
    ("veneer", "Хиты продаж"),
    ("glass", "Белые двери"),
    ("entrance", "Основной каталог"),
    ("thermo", "С терморазрывом"),
];

// JSON string literals are valid JS string literals.
fn lit(value: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

fn render_door(record: &CatalogRecord, cfg: &ModuleConfig) -> Result<String, serde_json::Error> {
    let material = if record.category == Category::Veneer {
        &cfg.veneer_material
    } else {
        &cfg.material
    };
    let price = record
        .price
        .map(|p| p.to_string())
        .unwrap_or_else(|| "null".into());

    let mut out = String::from("    {\n");
    out += &format!("      id: {},\n", record.id);
    out += &format!("      name: {},\n", lit(&record.name)?);
    out += &format!("      category: {},\n", lit(record.category.key())?);
    out += &format!("      price: {},\n", price);
    out += &format!("      image: {},\n", lit(&record.image)?);
    out += &format!("      features: {},\n", serde_json::to_string(&cfg.features)?);
    out += &format!("      acoustic: {},\n", lit(&cfg.acoustic)?);
    out += &format!("      size: {},\n", lit(&cfg.size)?);
    out += &format!("      material: {},\n", lit(material)?);
    out += &format!("      popular: {},\n", record.category == Category::Veneer);
    out += &format!("      new: {}\n", record.category == Category::Invisible);
    out += "    }";
    Ok(out)
}

pub fn render_module(
    records: &[CatalogRecord],
    cfg: &ModuleConfig,
    generated_at: &str,
) -> Result<String, serde_json::Error> {
    let mut out = format!("// Generated by door-catalog: {}\n\n", generated_at);
    out += "export const catalogData = {\n";
    out += "  categories: [\n";
    for (id, name) in MODULE_CATEGORIES {
        out += &format!("    {{ id: {}, name: {} }},\n", lit(id)?, lit(name)?);
    }
    out += "  ],\n\n";
    out += "  doors: [\n";

    let doors = records
        .iter()
        .map(|r| render_door(r, cfg))
        .collect::<Result<Vec<_>, _>>()?;
    if !doors.is_empty() {
        out += &doors.join(",\n");
        out += "\n";
    }

    out += "  ]\n";
    out += "};\n";
    Ok(out)
}

/// Overwrites `path` with the rendered module.
pub fn write_module(
    records: &[CatalogRecord],
    cfg: &ModuleConfig,
    generated_at: &str,
    path: &Path,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_module(records, cfg, generated_at)?)?;
    Ok(())
}
