//! Wish Form
//!
//! Staging and validation for the add/edit modal. Validation runs before any
//! request is issued; a form with errors is never submitted.

use std::collections::BTreeMap;

use super::wish::{Wish, WishFormData, WishId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Description,
    Price,
    ImageUrl,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::Price,
        FormField::ImageUrl,
    ];

    /// Input `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Price => "price",
            FormField::ImageUrl => "imageUrl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        FormField::ALL.into_iter().find(|field| field.name() == name)
    }

    fn error_message(&self) -> &'static str {
        match self {
            FormField::Title => "Title is required",
            FormField::Description => "Description is required",
            FormField::Price => "Price must be greater than 0",
            FormField::ImageUrl => "Image URL is required",
        }
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, &'static str>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    fn flag(&mut self, field: FormField) {
        self.0.insert(field, field.error_message());
    }
}

impl WishFormData {
    /// Required text fields must be non-blank and the price strictly positive.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        if self.title.trim().is_empty() {
            errors.flag(FormField::Title);
        }
        if self.description.trim().is_empty() {
            errors.flag(FormField::Description);
        }
        if !(self.price > 0.0 && self.price.is_finite()) {
            errors.flag(FormField::Price);
        }
        if self.image_url.trim().is_empty() {
            errors.flag(FormField::ImageUrl);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Empty or unreadable input becomes 0, which then fails validation
pub fn parse_price_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Modal form state: the staged data, its errors, and which wish (if any) is being edited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishForm {
    pub data: WishFormData,
    pub errors: FormErrors,
    /// Price exactly as typed, so partial input like `12.` survives re-rendering
    price_text: String,
    editing: Option<WishId>,
}

impl WishForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn for_wish(wish: &Wish) -> Self {
        Self {
            data: WishFormData::from(wish),
            errors: FormErrors::default(),
            price_text: wish.price.to_string(),
            editing: Some(wish.id.clone()),
        }
    }

    pub fn editing(&self) -> Option<&WishId> {
        self.editing.as_ref()
    }

    pub fn heading(&self) -> &'static str {
        if self.editing.is_some() { "Edit Wish" } else { "Add Wish" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() { "Save" } else { "Add" }
    }

    /// Current text for an input
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.data.title.clone(),
            FormField::Description => self.data.description.clone(),
            FormField::Price => self.price_text.clone(),
            FormField::ImageUrl => self.data.image_url.clone(),
        }
    }

    /// Apply an input change and drop that field's error
    pub fn set_field(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::Title => self.data.title = raw.to_string(),
            FormField::Description => self.data.description = raw.to_string(),
            FormField::Price => {
                self.price_text = raw.to_string();
                self.data.price = parse_price_input(raw);
            }
            FormField::ImageUrl => self.data.image_url = raw.to_string(),
        }
        self.errors.clear(field);
    }

    /// Re-run validation and record the outcome; returns true when submittable
    pub fn validate(&mut self) -> bool {
        match self.data.validate() {
            Ok(()) => {
                self.errors = FormErrors::default();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_data() -> WishFormData {
        WishFormData {
            title: "Camera".to_string(),
            description: "Mirrorless body".to_string(),
            price: 899.0,
            image_url: "https://img.test/cam.jpg".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_data().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_flagged() {
        let data = WishFormData {
            title: "   ".to_string(),
            description: String::new(),
            price: 10.0,
            image_url: "\t".to_string(),
        };
        let errors = data.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        assert_eq!(errors.get(FormField::Description), Some("Description is required"));
        assert_eq!(errors.get(FormField::ImageUrl), Some("Image URL is required"));
        assert!(!errors.contains(FormField::Price));
    }

    #[test]
    fn test_non_positive_price_is_flagged() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let data = WishFormData { price, ..valid_data() };
            let errors = data.validate().unwrap_err();
            assert_eq!(errors.get(FormField::Price), Some("Price must be greater than 0"));
        }
    }

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input(""), 0.0);
        assert_eq!(parse_price_input("abc"), 0.0);
        assert_eq!(parse_price_input(" 12.5 "), 12.5);
    }

    #[test]
    fn test_set_field_clears_its_error() {
        let mut form = WishForm::blank();
        assert!(!form.validate());
        assert_eq!(form.errors.len(), 4);

        form.set_field(FormField::Title, "Boots");
        assert!(!form.errors.contains(FormField::Title));
        assert!(form.errors.contains(FormField::Price));

        form.set_field(FormField::Price, "120.");
        assert_eq!(form.data.price, 120.0);
        assert_eq!(form.value(FormField::Price), "120.");
        assert!(!form.errors.contains(FormField::Price));
    }

    #[test]
    fn test_edit_form_prefills_from_wish() {
        let wish = Wish {
            id: WishId::new("9"),
            title: "Tent".to_string(),
            description: "Two person".to_string(),
            price: 250.0,
            image_url: "https://img.test/tent.jpg".to_string(),
            created_at: "2026-05-05T00:00:00.000Z".to_string(),
        };
        let form = WishForm::for_wish(&wish);
        assert_eq!(form.editing(), Some(&WishId::new("9")));
        assert_eq!(form.heading(), "Edit Wish");
        assert_eq!(form.submit_label(), "Save");
        assert_eq!(form.value(FormField::Price), "250");

        let blank = WishForm::blank();
        assert_eq!(blank.heading(), "Add Wish");
        assert_eq!(blank.value(FormField::Price), "");
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("id"), None);
    }
}
