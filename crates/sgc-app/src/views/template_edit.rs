//! Template create/edit form

use sgc_core::validation::{validate_cron, validate_required};
use sgc_core::Template;

use crate::form::{field_cycle, FieldRow, TextField};

field_cycle!(TemplateField {
    Name,
    Cron,
    Pattern,
    Content,
});

#[derive(Debug, Clone, Default)]
pub struct TemplateEditState {
    pub id: u64,
    pub name: TextField,
    pub cron: TextField,
    pub pattern: TextField,
    pub content: TextField,
    pub focus: TemplateField,
    pub submitting: bool,
}

impl TemplateEditState {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(template: &Template) -> Self {
        Self {
            id: template.id,
            name: TextField::new(template.name.clone()),
            cron: TextField::new(template.cron.clone()),
            pattern: TextField::new(template.pattern.clone()),
            content: TextField::new(template.content.clone()),
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id != 0
    }

    pub fn field_mut(&mut self, field: TemplateField) -> &mut TextField {
        match field {
            TemplateField::Name => &mut self.name,
            TemplateField::Cron => &mut self.cron,
            TemplateField::Pattern => &mut self.pattern,
            TemplateField::Content => &mut self.content,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        self.field_mut(self.focus)
    }

    pub fn validate(&mut self) -> Option<Template> {
        let name = self
            .name
            .check(validate_required(&self.name.value, "a name").map(str::to_string));
        let cron = self.cron.check(validate_cron(&self.cron.value).map(str::to_string));
        let pattern_value = self.pattern.value.clone();
        let pattern = self
            .pattern
            .check(validate_required(&pattern_value, "a pattern").map(|_| pattern_value.clone()));
        let content = self
            .content
            .check(validate_required(&self.content.value, "the email content").map(str::to_string));

        Some(Template {
            id: self.id,
            name: name?,
            cron: cron?,
            pattern: pattern?,
            content: content?,
        })
    }

    pub fn rows(&self) -> Vec<FieldRow<'_>> {
        vec![
            FieldRow::new("Name", &self.name, self.focus == TemplateField::Name),
            FieldRow::new("Cron", &self.cron, self.focus == TemplateField::Cron)
                .hint("min hour day month weekday"),
            FieldRow::new("Pattern", &self.pattern, self.focus == TemplateField::Pattern)
                .hint("regular expression"),
            FieldRow::new("Content", &self.content, self.focus == TemplateField::Content),
        ]
    }
}
