//! sObject get, create, update, upsert and delete.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result};
use crate::sobject::{CreateResult, UpsertResult};
use crate::validation::{encode_segment, require_field, require_id, require_sobject};

impl super::SalesforceRestClient {
    fn record_url(&self, sobject: &str, id: &str) -> String {
        self.client
            .rest_url(&format!("sobjects/{}/{}", sobject, encode_segment(id)))
    }

    /// Get a record by ID.
    ///
    /// Returns `None` if no record with that ID exists.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, sobject: &str, id: &str) -> Result<Option<T>> {
        require_sobject(sobject)?;
        require_id(id)?;
        let record = self.client.get_json_opt(&self.record_url(sobject, id)).await?;
        if record.is_none() {
            debug!("Record not found");
        }
        Ok(record)
    }

    /// Create a new record.
    ///
    /// Returns the ID of the created record.
    #[instrument(skip(self, record))]
    pub async fn create<T: Serialize + ?Sized>(&self, sobject: &str, record: &T) -> Result<String> {
        require_sobject(sobject)?;
        let url = self.client.rest_url(&format!("sobjects/{sobject}"));
        let request = self.client.post(&url).json(record)?;
        let response = self.client.execute(request).await?;

        let status = response.status();
        let result: Option<CreateResult> = response.json_opt().await?;
        match result.and_then(|r| r.id) {
            Some(id) => {
                debug!(%id, "Record created");
                Ok(id)
            }
            None => Err(Error::new(ErrorKind::MissingId { status })),
        }
    }

    /// Update a record. Fields absent from `record` are left unchanged.
    ///
    /// Updating a record that does not exist is not an error.
    #[instrument(skip(self, record))]
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        sobject: &str,
        id: &str,
        record: &T,
    ) -> Result<()> {
        require_sobject(sobject)?;
        require_id(id)?;
        let request = self.client.patch(&self.record_url(sobject, id)).json(record)?;
        let response = self.client.execute(request).await?;
        if response.is_not_found() {
            debug!("Record not found, nothing updated");
        }
        Ok(())
    }

    /// Upsert a record keyed by an external ID field.
    ///
    /// Returns the server's result when it answers with a body, which
    /// Salesforce does when the record was created. An update of an
    /// existing record answers 204 and yields `None`.
    #[instrument(skip(self, record))]
    pub async fn update_by_external<T: Serialize + ?Sized>(
        &self,
        sobject: &str,
        external_id_field: &str,
        external_id: &str,
        record: &T,
    ) -> Result<Option<UpsertResult>> {
        require_sobject(sobject)?;
        require_field(external_id_field)?;
        require_id(external_id)?;
        let path = format!(
            "sobjects/{}/{}/{}",
            sobject,
            external_id_field,
            encode_segment(external_id)
        );
        let result = self
            .client
            .patch_json_opt(&self.client.rest_url(&path), record)
            .await?;
        Ok(result)
    }

    /// Delete a record.
    ///
    /// Deleting a record that does not exist is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, sobject: &str, id: &str) -> Result<()> {
        require_sobject(sobject)?;
        require_id(id)?;
        if !self.client.delete_request(&self.record_url(sobject, id)).await? {
            debug!("Record not found, nothing deleted");
        }
        Ok(())
    }
}
