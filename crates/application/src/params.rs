use rbac_admin_domain::DomainError;

/// Caller-supplied fields for creating or updating a group.
///
/// The association id lists keep the comma-delimited wire format of the
/// admin console: segments are trimmed and blank segments are ignored, so
/// `""`, `" "` and `"1, ,2"` are all accepted.
#[derive(Debug, Clone, Default)]
pub struct GroupParam {
    pub name: String,
    pub resource_ids: Option<String>,
    pub role_ids: Option<String>,
}

impl GroupParam {
    pub fn resource_id_list(&self) -> Result<Vec<i64>, DomainError> {
        parse_id_list(self.resource_ids.as_deref())
    }

    pub fn role_id_list(&self) -> Result<Vec<i64>, DomainError> {
        parse_id_list(self.role_ids.as_deref())
    }
}

/// Splits a comma-delimited id string. `None` or blank input yields an
/// empty list; non-numeric segments are rejected.
pub fn parse_id_list(raw: Option<&str>) -> Result<Vec<i64>, DomainError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let mut ids = Vec::new();
    for segment in raw.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let id = segment
            .parse::<i64>()
            .map_err(|_| DomainError::InvalidIdList(format!("'{}' is not a valid id", segment)))?;
        ids.push(id);
    }
    Ok(ids)
}
