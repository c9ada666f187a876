use std::fmt;

use crate::record::{Draft, FieldName, FieldValue, RecordData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, trimmed at submit time.
    Text,
    /// Monetary amount, edited as text and parsed to a float at submit time.
    Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: FieldName,
    pub kind: FieldKind,
}

/// Static description of one resource kind. The controllers are generic over
/// this; the two catalog constants below are the only instances.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    /// Singular label for user-facing messages ("product").
    pub label: &'static str,
    /// Plural label for user-facing messages ("products").
    pub plural: &'static str,
    /// Wire path segment of the collection endpoint.
    pub collection: &'static str,
    /// Route of the list view.
    pub list_path: &'static str,
    /// Route of the create form.
    pub new_path: &'static str,
    /// Route prefix of the edit form; the record id is the final segment.
    pub edit_prefix: &'static str,
    /// Ordered field list. Every field is required.
    pub fields: &'static [Field],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The schema's monetary field. Both catalogs carry exactly one.
    pub fn money_field(&self) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.kind == FieldKind::Money)
    }

    pub fn edit_path(&self, id: &str) -> String {
        format!("{}/{}", self.edit_prefix, id)
    }

    /// Presence check plus money parsing: the only client-side validation.
    /// Text fields are trimmed; the money field must be a finite,
    /// non-negative float.
    pub fn validate(&self, draft: &Draft) -> Result<RecordData, DraftError> {
        if self
            .fields
            .iter()
            .any(|field| draft.get(field.name).trim().is_empty())
        {
            return Err(DraftError::MissingFields);
        }

        let mut data = RecordData::new();
        for field in self.fields {
            let raw = draft.get(field.name).trim();
            let value = match field.kind {
                FieldKind::Text => FieldValue::Text(raw.to_string()),
                FieldKind::Money => {
                    let amount: f64 = raw
                        .parse()
                        .ok()
                        .filter(|amount: &f64| amount.is_finite())
                        .ok_or(DraftError::NotANumber(field.name))?;
                    if amount < 0.0 {
                        return Err(DraftError::NegativeAmount(field.name));
                    }
                    FieldValue::Number(amount)
                }
            };
            data.insert(field.name, value);
        }
        Ok(data)
    }
}

/// Why a draft was rejected before reaching the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    MissingFields,
    NotANumber(FieldName),
    NegativeAmount(FieldName),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingFields => write!(f, "all fields are required"),
            DraftError::NotANumber(name) => write!(f, "field '{name}' must be a number"),
            DraftError::NegativeAmount(name) => write!(f, "field '{name}' must not be negative"),
        }
    }
}

/// Product catalog. Wire field names follow the backend contract.
pub const PRODUCTS: Schema = Schema {
    label: "product",
    plural: "products",
    collection: "produtos",
    list_path: "/produtos",
    new_path: "/produtos/cadastro",
    edit_prefix: "/produtos/editar",
    fields: &[
        Field {
            name: "nome",
            kind: FieldKind::Text,
        },
        Field {
            name: "preco",
            kind: FieldKind::Money,
        },
        Field {
            name: "descricao",
            kind: FieldKind::Text,
        },
        Field {
            name: "imagem",
            kind: FieldKind::Text,
        },
    ],
};

/// Shipment catalog. The shipment list is the console's landing route.
pub const SHIPMENTS: Schema = Schema {
    label: "shipment",
    plural: "shipments",
    collection: "envios",
    list_path: "/",
    new_path: "/envios/novo",
    edit_prefix: "/envios/editar",
    fields: &[
        Field {
            name: "destinatario",
            kind: FieldKind::Text,
        },
        Field {
            name: "endereco",
            kind: FieldKind::Text,
        },
        Field {
            name: "valor",
            kind: FieldKind::Money,
        },
        Field {
            name: "etiqueta",
            kind: FieldKind::Text,
        },
    ],
};
