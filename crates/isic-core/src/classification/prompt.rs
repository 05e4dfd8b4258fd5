//! Prompt template sent to the model.
//!
//! The wording (including trailing spaces) is kept byte-stable so results stay
//! comparable with earlier runs of the tool.

const PROMPT_INTRO: &str = concat!(
    "\n",
    "Your task is to act as an expert in industrial classifications. \n",
    "Identify the International Standard Industrial Classification (ISIC) of All Economic Activities, \n",
    "maintained by the United Nations Statistics Division (UNSD), for the company described below.\n",
    "\n",
);

const PROMPT_INSTRUCTIONS: &str = concat!(
    "\n",
    "Please provide:\n",
    "1. The ISIC Section (Letter).\n",
    "2. The ISIC Division (2-digit code).\n",
    "3. The specific ISIC Class (4-digit code) and its official name.\n",
    "4. A brief explanation of why this classification was chosen.\n",
);

/// Substitute the company name and description verbatim into the template.
pub fn build_prompt(company_name: &str, company_description: &str) -> String {
    format!(
        "{PROMPT_INTRO}Company Name: {company_name}\nActivity Description: {company_description}\n{PROMPT_INSTRUCTIONS}"
    )
}
