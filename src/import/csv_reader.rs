use std::collections::HashMap;

use csv::{ReaderBuilder, Trim};

use crate::error::ImportError;

/// One data row of the livestock CSV, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvRecord {
    /// 1-based line number in the source document.
    pub line: u64,
    fields: HashMap<String, String>,
}

impl CsvRecord {
    pub fn from_pairs<K, V>(line: u64, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value under `header`, or `""` when the column is absent.
    pub fn get(&self, header: &str) -> &str {
        self.fields.get(header).map(String::as_str).unwrap_or("")
    }

    pub fn id(&self) -> &str {
        self.get("id")
    }

    pub fn name(&self) -> &str {
        self.get("name")
    }

    pub fn nacimiento(&self) -> &str {
        self.get("nacimiento")
    }

    pub fn dias_nacida(&self) -> &str {
        self.get("diasNacida")
    }

    pub fn categoria(&self) -> &str {
        self.get("categoria")
    }

    pub fn establo(&self) -> &str {
        self.get("establo")
    }

    pub fn remate(&self) -> &str {
        self.get("remate")
    }

    pub fn propietario(&self) -> &str {
        self.get("propietario")
    }

    pub fn descripcion(&self) -> &str {
        self.get("descripcion")
    }

    pub fn raza(&self) -> &str {
        self.get("raza")
    }

    pub fn sexo(&self) -> &str {
        self.get("sexo")
    }

    pub fn image_src(&self) -> &str {
        self.get("imageSrc")
    }

    pub fn puntaje(&self) -> &str {
        self.get("puntaje")
    }
}

fn clean_field(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}

/// Parses CSV text whose first line is the header row.
///
/// Quoted fields may contain commas. Blank lines are skipped. Rows with more
/// or fewer fields than the header are kept: missing columns read as empty
/// and surplus fields are dropped, with a warning.
pub fn parse_csv(text: &str) -> Result<Vec<CsvRecord>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(clean_field).collect();
    if headers.iter().all(String::is_empty) {
        return Err(ImportError::EmptyCsv);
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let line = row.position().map(|p| p.line()).unwrap_or_default();
        if row.len() != headers.len() {
            tracing::warn!(
                line,
                expected = headers.len(),
                found = row.len(),
                "Ragged CSV row"
            );
        }

        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.clone(), row.get(i).map(clean_field).unwrap_or_default()));

        records.push(CsvRecord::from_pairs(line, fields));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,createdAt,nacimiento,diasNacida,categoria,establo,remate,propietario,descripcion,raza,sexo,imageSrc,puntaje";

    #[test]
    fn parses_one_record_per_data_line() {
        let mut text = String::from(HEADER);
        for i in 0..7 {
            text.push_str(&format!(
                "\n{i},Animal {i},,2023-01-0{d},,Adultos,,false,,,HOLSTEIN,hembra,,",
                d = i % 9 + 1
            ));
        }

        let records = parse_csv(&text).unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[3].name(), "Animal 3");
        assert_eq!(records[3].raza(), "HOLSTEIN");
        assert_eq!(records[0].line, 2);
    }

    #[test]
    fn keeps_commas_inside_quoted_fields() {
        let text = format!(
            "{HEADER}\n7,\"Lucero\",,,,Adultos,\"Establo Norte, Sur\",true,\"Smith, John\",\"Buena, fuerte\",JERSEY,macho,,91"
        );

        let records = parse_csv(&text).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.propietario(), "Smith, John");
        assert_eq!(r.establo(), "Establo Norte, Sur");
        assert_eq!(r.descripcion(), "Buena, fuerte");
        assert_eq!(r.sexo(), "macho");
        assert_eq!(r.puntaje(), "91");
    }

    #[test]
    fn skips_blank_lines_and_handles_crlf() {
        let text = "id,name\r\n1,Uno\r\n\r\n   \r\n2,Dos\r\n";
        let records = parse_csv(text).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Uno", "Dos"]);
    }

    #[test]
    fn tolerates_ragged_rows() {
        let text = "id,name,raza\n1,Corto\n2,Largo,ANGUS,extra";
        let records = parse_csv(text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].raza(), "");
        assert_eq!(records[1].raza(), "ANGUS");
        assert_eq!(records[1].get("extra"), "");
    }

    #[test]
    fn strips_quotes_from_headers_and_values() {
        let text = "\"id\",\"name\"\n\"10\",\"Rosa\"";
        let records = parse_csv(text).unwrap();
        assert_eq!(records[0].id(), "10");
        assert_eq!(records[0].name(), "Rosa");
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(matches!(parse_csv(""), Err(ImportError::EmptyCsv)));
    }
}
