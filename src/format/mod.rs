//! Output formatting for properties (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::easybroker::Property;

/// Formats properties for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single property.
    pub fn format_property(&self, property: &Property) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(property),
            OutputFormat::Table => self.table_single(property),
            OutputFormat::Markdown => self.markdown_single(property),
            OutputFormat::Csv => self.csv_properties(std::slice::from_ref(property)),
        }
    }

    /// Formats multiple properties.
    pub fn format_properties(&self, properties: &[Property]) -> String {
        if properties.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No properties found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_properties(properties),
            OutputFormat::Table => self.table_properties(properties),
            OutputFormat::Markdown => self.markdown_properties(properties),
            OutputFormat::Csv => self.csv_properties(properties),
        }
    }

    // JSON formatting

    fn json_single(&self, property: &Property) -> String {
        serde_json::to_string_pretty(property).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_properties(&self, properties: &[Property]) -> String {
        serde_json::to_string_pretty(properties).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, property: &Property) -> String {
        let mut lines = Vec::new();

        lines.push(format!("ID:       {}", property.public_id));
        lines.push(format!("Title:    {}", property.title));
        lines.push(format!("Type:     {}", property.property_type));
        lines.push(format!("Location: {}", property.location.name));

        if let Some(image) = property.cover_image() {
            lines.push(format!("Image:    {}", image));
        }

        if !property.images.is_empty() {
            lines.push(format!("Gallery:  {} images", property.images.len()));
        }

        if !property.description.is_empty() {
            lines.push(String::new());
            lines.push(property.description.clone());
        }

        lines.join("\n")
    }

    fn table_properties(&self, properties: &[Property]) -> String {
        let id_width = 12;
        let type_width = 16;
        let location_width = 30;
        let title_width = 50;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<id_width$}  {:<type_width$}  {:<location_width$}  {}",
            "ID", "Type", "Location", "Title"
        ));
        lines.push(format!(
            "{:-<id_width$}  {:-<type_width$}  {:-<location_width$}  {:-<title_width$}",
            "", "", "", ""
        ));

        for property in properties {
            lines.push(format!(
                "{:<id_width$}  {:<type_width$}  {:<location_width$}  {}",
                property.public_id,
                truncate(&property.property_type, type_width),
                truncate(&property.location.name, location_width),
                truncate(&property.title, title_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} properties", properties.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, property: &Property) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", property.title));
        lines.push(String::new());

        lines.push(format!("- **ID:** {}", property.public_id));
        lines.push(format!("- **Type:** {}", property.property_type));
        lines.push(format!("- **Location:** {}", property.location.name));

        if let Some(image) = property.cover_image() {
            lines.push(format!("- **Image:** ![{}]({})", property.title, image));
        }

        if !property.description.is_empty() {
            lines.push(String::new());
            lines.push(property.description.clone());
        }

        lines.join("\n")
    }

    fn markdown_properties(&self, properties: &[Property]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Type | Location | Title |".to_string());
        lines.push("|----|------|----------|-------|".to_string());

        for property in properties {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                property.public_id,
                property.property_type,
                property.location.name,
                truncate(&property.title, 40)
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} properties found*", properties.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "public_id,title,property_type,location,image_count,cover_image".to_string()
    }

    fn csv_properties(&self, properties: &[Property]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for property in properties {
            lines.push(format!(
                "{},{},{},{},{},{}",
                Self::csv_escape(&property.public_id),
                Self::csv_escape(&property.title),
                Self::csv_escape(&property.property_type),
                Self::csv_escape(&property.location.name),
                property.images.len(),
                property.cover_image().unwrap_or_default()
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Shortens `s` to `width` characters, ending in "..." when cut.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}
