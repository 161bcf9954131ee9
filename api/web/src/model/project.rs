use serde::Deserialize;
use validator::Validate;

pub const TITLE_MESSAGE: &str = "Please enter a valid project title (at least 3 characters)";
pub const DESCRIPTION_MESSAGE: &str =
    "Please enter a detailed description (at least 10 characters)";
pub const IMAGE_FILE_NAME_MESSAGE: &str = "Please enter an image file name";

pub const PROJECT_MESSAGES: [&str; 3] =
    [TITLE_MESSAGE, DESCRIPTION_MESSAGE, IMAGE_FILE_NAME_MESSAGE];

#[derive(Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InsertOneProjectReqForm {
    #[validate(length(
        min = 3,
        message = "Please enter a valid project title (at least 3 characters)"
    ))]
    title: String,
    #[validate(length(
        min = 10,
        message = "Please enter a detailed description (at least 10 characters)"
    ))]
    description: String,
    #[validate(length(min = 1, message = "Please enter an image file name"))]
    image_file_name: String,
}

impl InsertOneProjectReqForm {
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            image_file_name: self.image_file_name.trim().to_owned(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_file_name(&self) -> &str {
        &self.image_file_name
    }
}

#[cfg(test)]
impl InsertOneProjectReqForm {
    pub fn new(title: &str, description: &str, image_file_name: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            image_file_name: image_file_name.to_owned(),
        }
    }
}
