//! Job list page

use sgc_core::{Job, JobStatus};

use super::RecordList;

#[derive(Debug, Clone, Default)]
pub struct JobListState {
    pub list: RecordList<Job>,
}

impl JobListState {
    pub fn jobs(&self) -> &[Job] {
        &self.list.items
    }

    pub fn get(&self, id: u64) -> Option<&Job> {
        self.list.find(|j| j.id == id)
    }

    pub fn set_status(&mut self, id: u64, status: JobStatus) -> bool {
        match self.list.find_mut(|j| j.id == id) {
            Some(job) => {
                job.status = status;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        self.list.remove_where(|j| j.id == id) > 0
    }
}
