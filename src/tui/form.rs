//! Field layout of each step screen
//!
//! Every controller is exposed to the TUI as an ordered list of fields.
//! The handler edits fields by index; the step view renders whatever
//! [`StepForm::fields`] reports.

use crate::models::{AttachmentRef, CompanyType, Country, Currency, PricingModel, Service};
use crate::validation::FieldErrors;
use crate::wizard::{AddressController, CompanyController, Screen, ServicesController};

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// One of a fixed list, cycled with Left/Right
    Select,
    /// Checkbox, flipped with Space
    Toggle,
    /// File path
    File,
}

impl FieldKind {
    /// Whether typing edits the field
    pub fn is_textual(self) -> bool {
        matches!(self, Self::Text | Self::File)
    }
}

/// What the step view shows for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
    pub error: Option<String>,
}

impl FieldView {
    fn new(label: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            value: String::new(),
            kind,
            required: false,
            error: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    fn error(mut self, errors: &FieldErrors, field: &str) -> Self {
        self.error = errors.get(field).map(str::to_string);
        self
    }
}

/// A step screen as seen by the TUI
pub trait StepForm {
    fn fields(&self) -> Vec<FieldView>;

    /// Raw text of a textual field, for loading into the editor
    fn text(&self, index: usize) -> String;

    /// Store edited text into a textual field
    fn set_text(&mut self, index: usize, value: &str);

    /// Step a select field through its options
    fn cycle(&mut self, index: usize, forward: bool);

    /// Flip a toggle field
    fn toggle(&mut self, index: usize);

    fn field_count(&self) -> usize {
        self.fields().len()
    }

    /// Index of the first field showing an error
    fn first_error(&self) -> Option<usize> {
        self.fields().iter().position(|f| f.error.is_some())
    }
}

/// Borrow the mounted screen as a form
pub fn form(screen: &Screen) -> &dyn StepForm {
    match screen {
        Screen::Company(c) => c,
        Screen::Address(c) => c,
        Screen::Services(c) => c,
    }
}

pub fn form_mut(screen: &mut Screen) -> &mut dyn StepForm {
    match screen {
        Screen::Company(c) => c,
        Screen::Address(c) => c,
        Screen::Services(c) => c,
    }
}

/// Blank text clears an optional value
fn text_value(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Next option after `current`, wrapping; `None` is the slot before the first
/// option when `allow_none` is set
fn cycle_option(
    options: &[&'static str],
    current: Option<&str>,
    forward: bool,
    allow_none: bool,
) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let mut slots: Vec<Option<&str>> = Vec::with_capacity(options.len() + 1);
    if allow_none {
        slots.push(None);
    }
    slots.extend(options.iter().map(|o| Some(*o)));

    let position = slots.iter().position(|s| *s == current);
    let next = match (position, forward) {
        (None, true) => 0,
        (None, false) => slots.len() - 1,
        (Some(i), true) => (i + 1) % slots.len(),
        (Some(i), false) => (i + slots.len() - 1) % slots.len(),
    };
    slots[next].map(str::to_string)
}

fn shown(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn attachment_text(attachment: &Option<AttachmentRef>) -> String {
    attachment
        .as_ref()
        .and_then(|a| a.file_path())
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

fn attachment_shown(attachment: &Option<AttachmentRef>) -> String {
    attachment.as_ref().map(|a| a.to_string()).unwrap_or_default()
}

impl StepForm for CompanyController {
    fn fields(&self) -> Vec<FieldView> {
        use FieldKind::*;
        let d = self.draft();
        let e = self.errors();
        vec![
            FieldView::new("Company Name", Text)
                .required()
                .value(shown(&d.company_name))
                .error(e, "companyName"),
            FieldView::new("Company Type", Select)
                .required()
                .value(shown(&d.company_type))
                .error(e, "companyType"),
            FieldView::new("Registration Number", Text).value(shown(&d.registration_number)),
            FieldView::new("Established Date", Text).value(shown(&d.established_date)),
            FieldView::new("Employee Count", Text)
                .value(shown(&d.employee_count))
                .error(e, "employeeCount"),
            FieldView::new("Contact Person Name", Text)
                .required()
                .value(shown(&d.contact_name))
                .error(e, "contactName"),
            FieldView::new("Contact Email", Text)
                .required()
                .value(shown(&d.contact_email))
                .error(e, "contactEmail"),
            FieldView::new("Contact Phone", Text)
                .required()
                .value(shown(&d.contact_phone))
                .error(e, "contactPhone"),
            FieldView::new("Company Logo", File).value(attachment_shown(&d.company_logo)),
        ]
    }

    fn text(&self, index: usize) -> String {
        let d = self.draft();
        match index {
            0 => shown(&d.company_name),
            2 => shown(&d.registration_number),
            3 => shown(&d.established_date),
            4 => shown(&d.employee_count),
            5 => shown(&d.contact_name),
            6 => shown(&d.contact_email),
            7 => shown(&d.contact_phone),
            8 => attachment_text(&d.company_logo),
            _ => String::new(),
        }
    }

    fn set_text(&mut self, index: usize, value: &str) {
        if index == 8 {
            self.attach_logo(value);
            return;
        }
        let d = self.draft_mut();
        let slot = match index {
            0 => &mut d.company_name,
            2 => &mut d.registration_number,
            3 => &mut d.established_date,
            4 => &mut d.employee_count,
            5 => &mut d.contact_name,
            6 => &mut d.contact_email,
            7 => &mut d.contact_phone,
            _ => return,
        };
        *slot = text_value(value);
    }

    fn cycle(&mut self, index: usize, forward: bool) {
        if index == 1 {
            let d = self.draft_mut();
            let options = CompanyType::ALL.map(CompanyType::label);
            d.company_type = cycle_option(&options, d.company_type.as_deref(), forward, false);
        }
    }

    fn toggle(&mut self, _index: usize) {}
}

impl StepForm for AddressController {
    fn fields(&self) -> Vec<FieldView> {
        use FieldKind::*;
        let d = self.draft();
        let e = self.errors();
        vec![
            FieldView::new("Address Line", Text)
                .required()
                .value(shown(&d.address))
                .error(e, "address"),
            FieldView::new("Country", Select)
                .required()
                .value(shown(&d.country))
                .error(e, "country"),
            FieldView::new("State", Select).value(shown(&d.state)),
            FieldView::new("ZIP / PIN Code", Text)
                .required()
                .value(shown(&d.zip_code))
                .error(e, "zipCode"),
            FieldView::new("Bank Name", Text)
                .required()
                .value(shown(&d.bank_name))
                .error(e, "bankName"),
        ]
    }

    fn text(&self, index: usize) -> String {
        let d = self.draft();
        match index {
            0 => shown(&d.address),
            3 => shown(&d.zip_code),
            4 => shown(&d.bank_name),
            _ => String::new(),
        }
    }

    fn set_text(&mut self, index: usize, value: &str) {
        let d = self.draft_mut();
        match index {
            0 => d.address = text_value(value),
            3 => d.zip_code = text_value(value),
            4 => d.bank_name = text_value(value),
            _ => {}
        }
    }

    fn cycle(&mut self, index: usize, forward: bool) {
        match index {
            1 => {
                let options = Country::ALL.map(Country::label);
                let country =
                    cycle_option(&options, self.draft().country.as_deref(), forward, false);
                self.select_country(country);
            }
            2 => {
                let options = self.state_options();
                let d = self.draft_mut();
                d.state = cycle_option(options, d.state.as_deref(), forward, true);
            }
            _ => {}
        }
    }

    fn toggle(&mut self, _index: usize) {}
}

const SERVICE_COUNT: usize = Service::ALL.len();
const PRICING_INDEX: usize = SERVICE_COUNT;
const CURRENCY_INDEX: usize = SERVICE_COUNT + 1;
const NOTES_INDEX: usize = SERVICE_COUNT + 2;
const FINAL_DOC_INDEX: usize = SERVICE_COUNT + 3;
const DECLARATION_INDEX: usize = SERVICE_COUNT + 4;

impl StepForm for ServicesController {
    fn fields(&self) -> Vec<FieldView> {
        use FieldKind::*;
        let d = self.draft();
        let e = self.errors();

        let mut fields: Vec<FieldView> = Service::ALL
            .iter()
            .map(|service| {
                FieldView::new(service.label(), Toggle)
                    .required()
                    .value(checkbox(d.has_service(*service)))
            })
            .collect();
        fields[0] = fields[0].clone().error(e, "services");

        fields.extend([
            FieldView::new("Pricing Model", Select)
                .required()
                .value(shown(&d.pricing_model))
                .error(e, "pricingModel"),
            FieldView::new("Preferred Currency", Select)
                .value(shown(&d.currency))
                .error(e, "currency"),
            FieldView::new("Additional Notes", Text).value(shown(&d.notes)),
            FieldView::new("Final Document", File).value(attachment_shown(&d.final_doc)),
            FieldView::new("I agree to the declaration", Toggle)
                .required()
                .value(checkbox(d.declaration == Some(true)))
                .error(e, "declaration"),
        ]);
        fields
    }

    fn text(&self, index: usize) -> String {
        let d = self.draft();
        match index {
            NOTES_INDEX => shown(&d.notes),
            FINAL_DOC_INDEX => attachment_text(&d.final_doc),
            _ => String::new(),
        }
    }

    fn set_text(&mut self, index: usize, value: &str) {
        match index {
            NOTES_INDEX => self.draft_mut().notes = text_value(value),
            FINAL_DOC_INDEX => self.attach_document(value),
            _ => {}
        }
    }

    fn cycle(&mut self, index: usize, forward: bool) {
        let d = self.draft_mut();
        match index {
            PRICING_INDEX => {
                let options = PricingModel::ALL.map(PricingModel::label);
                d.pricing_model = cycle_option(&options, d.pricing_model.as_deref(), forward, false);
            }
            CURRENCY_INDEX => {
                let options = Currency::ALL.map(Currency::code);
                d.currency = cycle_option(&options, d.currency.as_deref(), forward, true);
            }
            _ => {}
        }
    }

    fn toggle(&mut self, index: usize) {
        if let Some(service) = Service::ALL.get(index) {
            self.toggle_service(*service);
        } else if index == DECLARATION_INDEX {
            let d = self.draft_mut();
            d.declaration = Some(d.declaration != Some(true));
        }
    }
}
