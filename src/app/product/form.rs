//! 产品表单校验
//!
//! 把表单提交的原始文本转换为带类型的 `NewProduct`，失败时给出按字段归类的错误信息。

use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::num::IntErrorKind;
use validator::{Validate, ValidationError, ValidationErrors};

use super::model::{NewProduct, Product};

/// 文本字段允许的最大字符数
pub const MAX_TEXT_LENGTH: usize = 255;

const REQUIRED: &str = "This field is required.";
const NOT_A_NUMBER: &str = "Enter a whole number.";
const NULL_CHARACTER: &str = "Null characters are not allowed.";

/// 表单提交的原始字段，缺失的字段视为空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct ProductForm {
    #[validate(length(min = 1, max = 255), custom(function = "validate_text"))]
    pub name: String,

    #[validate(length(min = 1, max = 255), custom(function = "validate_text"))]
    pub description: String,

    #[validate(custom(function = "validate_price"))]
    pub price: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
        }
    }

    /// 去掉首尾空白后的副本
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price.trim().to_string(),
        }
    }

    /// 校验并转换为 `NewProduct`
    pub fn clean(&self) -> Result<NewProduct, FormErrors> {
        let form = self.trimmed();
        form.validate()
            .map_err(|errors| FormErrors::from_validation(&form, &errors))?;

        let price = parse_price(&form.price).map_err(|e| {
            let mut errors = FormErrors::default();
            errors.add("price", message_of(&e, NOT_A_NUMBER));
            errors
        })?;

        Ok(NewProduct {
            name: form.name,
            description: form.description,
            price,
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
        }
    }
}

/// PostgreSQL 的文本类型不能保存 NUL 字符
fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(validation_error("null_characters", NULL_CHARACTER.to_string()));
    }
    Ok(())
}

fn validate_price(price: &str) -> Result<(), ValidationError> {
    parse_price(price).map(|_| ())
}

fn parse_price(raw: &str) -> Result<i32, ValidationError> {
    if raw.is_empty() {
        return Err(validation_error("required", REQUIRED.to_string()));
    }

    raw.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => validation_error(
            "max_value",
            format!("Ensure this value is less than or equal to {}.", i32::MAX),
        ),
        IntErrorKind::NegOverflow => validation_error(
            "min_value",
            format!("Ensure this value is greater than or equal to {}.", i32::MIN),
        ),
        _ => validation_error("invalid", NOT_A_NUMBER.to_string()),
    })
}

fn validation_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

fn message_of(error: &ValidationError, fallback: &str) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

fn text_length_message(value: &str) -> String {
    match value.chars().count() {
        0 => REQUIRED.to_string(),
        n => format!(
            "Ensure this value has at most {} characters (it has {}).",
            MAX_TEXT_LENGTH, n
        ),
    }
}

/// 字段名到错误信息的映射，按字段名排序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl FormErrors {
    fn from_validation(form: &ProductForm, errors: &ValidationErrors) -> Self {
        let mut out = Self::default();
        for (field, field_errors) in errors.field_errors() {
            let field: &str = &field;
            for error in field_errors.iter() {
                let is_length = error.code == "length";
                match field {
                    "name" if is_length => out.add("name", text_length_message(&form.name)),
                    "name" => out.add("name", message_of(error, NULL_CHARACTER)),
                    "description" if is_length => {
                        out.add("description", text_length_message(&form.description))
                    }
                    "description" => out.add("description", message_of(error, NULL_CHARACTER)),
                    _ => out.add("price", message_of(error, NOT_A_NUMBER)),
                }
            }
        }
        out
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    /// 指定字段的错误信息，没有错误时为空切片
    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.fields.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}
