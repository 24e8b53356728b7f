use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Карточка товара/категории.
///
/// Mock API отдаёт категории и товары с одинаковым набором полей, поэтому
/// обе экранные формы работают с одним и тем же wire-типом. Идентификаторы
/// назначает сервер и возвращает их строками.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: String,
    pub price: String,
}

// ============================================================================
// DTO
// ============================================================================

/// DTO формы создания/редактирования.
///
/// `id` отсутствует в режиме создания и не сериализуется в тело запроса —
/// сервер назначает идентификатор сам.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub price: String,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: Some(p.id),
            name: p.name,
            email: p.email,
            image: p.image,
            price: p.price,
        }
    }
}

/// Ошибки валидации формы: сообщение на каждое проблемное поле.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.image.is_none() && self.price.is_none()
    }
}

impl ProductDto {
    /// Проверяет инварианты формы перед отправкой.
    ///
    /// Ошибки не блокируют отрисовку (показываются под полями), но блокируют
    /// отправку на сервер.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Обязательное поле".to_string());
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Обязательное поле".to_string());
        }
        if self.image.trim().is_empty() {
            errors.image = Some("Обязательное поле".to_string());
        } else if !is_valid_url(self.image.trim()) {
            errors.image = Some("Некорректный URL".to_string());
        }
        if self.price.trim().is_empty() {
            errors.price = Some("Обязательное поле".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Синтаксическая проверка URL картинки: http(s)-схема и непустой хост.
pub fn is_valid_url(s: &str) -> bool {
    let rest = if let Some(r) = s.strip_prefix("https://") {
        r
    } else if let Some(r) = s.strip_prefix("http://") {
        r
    } else {
        return false;
    };

    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty() && !host.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductDto {
        ProductDto {
            id: None,
            name: "Ноутбук".to_string(),
            email: "seller@example.com".to_string(),
            image: "https://example.com/img.png".to_string(),
            price: "1200".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_filled_form() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let dto = ProductDto::default();
        let errors = dto.validate().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.image.is_some());
        assert!(errors.price.is_some());
    }

    #[test]
    fn test_validate_rejects_malformed_image_url() {
        let mut dto = filled();
        dto.image = "not-a-url".to_string();
        let errors = dto.validate().unwrap_err();
        assert!(errors.image.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com/a.png"));
        assert!(is_valid_url("http://example.com"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("example.com/a.png"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://bad host/a.png"));
    }

    #[test]
    fn test_dto_serializes_without_id_in_create_mode() {
        let json = serde_json::to_string(&filled()).unwrap();
        assert!(!json.contains("\"id\""));

        let mut dto = filled();
        dto.id = Some("42".to_string());
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"id\":\"42\""));
    }

    #[test]
    fn test_product_roundtrip_to_dto() {
        let p = Product {
            id: "7".to_string(),
            name: "Телефон".to_string(),
            email: "shop@example.com".to_string(),
            image: "https://example.com/p.jpg".to_string(),
            price: "999".to_string(),
        };
        let dto = ProductDto::from(p.clone());
        assert_eq!(dto.id.as_deref(), Some("7"));
        assert_eq!(dto.name, p.name);
        assert!(dto.validate().is_ok());
    }
}
