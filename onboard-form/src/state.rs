//! The nested profile/workspace record behind the onboarding form.
use onboard_brand::DownloadedImage;

#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    pub image: Option<DownloadedImage>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct WorkspaceData {
    pub logo: Option<DownloadedImage>,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub address: String,
    pub sector: String,
}

/// The whole form record, held for the lifetime of a filling session.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pub profile: ProfileData,
    pub workspace: WorkspaceData,
}

/// Partial profile update; `None` fields leave the current value in place.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub image: Option<DownloadedImage>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Partial workspace update; `None` fields leave the current value in place.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceUpdate {
    pub logo: Option<DownloadedImage>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub address: Option<String>,
    pub sector: Option<String>,
}

/// Owner of the form record: shallow-merges partial updates into the
/// matching sub-record and replaces everything on reset.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    data: FormData,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) {
        let profile = &mut self.data.profile;
        if let Some(image) = update.image {
            profile.image = Some(image);
        }
        if let Some(first_name) = update.first_name {
            profile.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            profile.last_name = last_name;
        }
        if let Some(email) = update.email {
            profile.email = email;
        }
    }

    pub fn update_workspace(&mut self, update: WorkspaceUpdate) {
        let workspace = &mut self.data.workspace;
        if let Some(logo) = update.logo {
            workspace.logo = Some(logo);
        }
        if let Some(name) = update.name {
            workspace.name = name;
        }
        if let Some(description) = update.description {
            workspace.description = description;
        }
        if let Some(website_url) = update.website_url {
            workspace.website_url = website_url;
        }
        if let Some(address) = update.address {
            workspace.address = address;
        }
        if let Some(sector) = update.sector {
            workspace.sector = sector;
        }
    }

    /// The profile step has no required fields.
    pub fn validate_profile(&self) -> bool {
        true
    }

    /// The workspace step requires only a name.
    pub fn validate_workspace(&self) -> bool {
        !self.data.workspace.name.is_empty()
    }

    /// Replace the record with a fresh empty instance.
    pub fn reset(&mut self) {
        self.data = FormData::default();
    }
}
