//! Template list page

use sgc_core::Template;

use super::RecordList;

#[derive(Debug, Clone, Default)]
pub struct TemplateListState {
    pub list: RecordList<Template>,
}

impl TemplateListState {
    pub fn templates(&self) -> &[Template] {
        &self.list.items
    }

    pub fn get(&self, id: u64) -> Option<&Template> {
        self.list.find(|t| t.id == id)
    }

    pub fn remove(&mut self, id: u64) -> bool {
        self.list.remove_where(|t| t.id == id) > 0
    }
}
