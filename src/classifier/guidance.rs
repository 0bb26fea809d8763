use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::types::{Category, Resource};

#[derive(Debug, Error)]
pub enum GuidanceCatalogError {
    #[error("failed to read guidance catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse guidance catalog {path}: {message}")]
    Parse { path: String, message: String },
    #[error("guidance for '{category}' has an empty headline")]
    EmptyHeadline { category: &'static str },
    #[error("guidance for '{category}' has no steps")]
    EmptySteps { category: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    pub headline: String,
    pub steps: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Guidance {
    fn authored(headline: &str, steps: &[&str], resources: Vec<Resource>) -> Self {
        Self {
            headline: headline.to_string(),
            steps: steps.iter().map(|step| step.to_string()).collect(),
            resources,
        }
    }
}

/// One payload per category. Missing or unknown categories fail deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GuidanceCatalog {
    pub fire: Guidance,
    pub accident: Guidance,
    pub cardiac: Guidance,
    pub drowning: Guidance,
    pub image_analysis: Guidance,
    pub choking: Guidance,
    pub gas_leak: Guidance,
    pub general: Guidance,
}

impl GuidanceCatalog {
    pub fn guidance(&self, category: Category) -> &Guidance {
        match category {
            Category::Fire => &self.fire,
            Category::Accident => &self.accident,
            Category::Cardiac => &self.cardiac,
            Category::Drowning => &self.drowning,
            Category::ImageAnalysis => &self.image_analysis,
            Category::Choking => &self.choking,
            Category::GasLeak => &self.gas_leak,
            Category::General => &self.general,
        }
    }

    pub fn load(path: &Path) -> Result<Self, GuidanceCatalogError> {
        let content = fs::read_to_string(path).map_err(|source| GuidanceCatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn parse(content: &str, origin: &str) -> Result<Self, GuidanceCatalogError> {
        let catalog: GuidanceCatalog =
            json5::from_str(content).map_err(|err| GuidanceCatalogError::Parse {
                path: origin.to_string(),
                message: err.to_string(),
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), GuidanceCatalogError> {
        for category in Category::ALL {
            let guidance = self.guidance(category);
            if guidance.headline.trim().is_empty() {
                return Err(GuidanceCatalogError::EmptyHeadline {
                    category: category.as_str(),
                });
            }
            if guidance.steps.is_empty() {
                return Err(GuidanceCatalogError::EmptySteps {
                    category: category.as_str(),
                });
            }
        }
        Ok(())
    }

    pub fn builtin() -> Self {
        Self {
            fire: Guidance::authored(
                "🔥 FIRE EMERGENCY - Evacuate immediately!",
                &[
                    "Get everyone out of the building immediately",
                    "Stay low to the ground to avoid smoke inhalation",
                    "Feel doors with the back of your hand before opening; do not open hot doors",
                    "Never use elevators during a fire",
                    "Once outside, move far away from the building and stay out",
                    "Call emergency services from a safe location",
                    "If your clothes catch fire: Stop, Drop, and Roll",
                    "Meet at your designated meeting point and account for everyone",
                ],
                vec![
                    Resource::typed("Emergency Services: 911", "call"),
                    Resource::url(
                        "Red Cross Fire Safety",
                        "https://www.redcross.org/get-help/how-to-prepare-for-emergencies/types-of-emergencies/fire.html",
                    ),
                ],
            ),
            accident: Guidance::authored(
                "🚗 ACCIDENT - Secure the scene and check for injuries",
                &[
                    "Make sure the scene is safe before approaching",
                    "Turn on hazard lights and set up warning triangles if available",
                    "Check all people involved for injuries",
                    "Do not move injured people unless they are in immediate danger",
                    "Apply firm pressure to any bleeding wounds with a clean cloth",
                    "Keep injured people warm and calm until help arrives",
                    "Call emergency services and report the exact location",
                ],
                vec![
                    Resource::typed("Emergency Services: 911", "call"),
                    Resource::url(
                        "First Aid for Car Accidents",
                        "https://www.redcross.org/take-a-class/first-aid",
                    ),
                ],
            ),
            cardiac: Guidance::authored(
                "❤️ CARDIAC EMERGENCY - Start CPR if the person is not breathing!",
                &[
                    "Call emergency services immediately",
                    "Check if the person is responsive and breathing",
                    "If not breathing, begin CPR: 30 chest compressions followed by 2 rescue breaths",
                    "Push hard and fast in the center of the chest, 100-120 compressions per minute",
                    "Send someone to find an AED (automated external defibrillator)",
                    "Use the AED as soon as it arrives and follow its voice prompts",
                    "Continue CPR until emergency services take over",
                ],
                vec![
                    Resource::typed("Emergency Services: 911", "call"),
                    Resource::url("American Heart Association CPR", "https://cpr.heart.org"),
                ],
            ),
            drowning: Guidance::authored(
                "🌊 DROWNING EMERGENCY - Reach, throw, don't go!",
                &[
                    "Call for help and alert a lifeguard if one is present",
                    "Reach toward the person with a pole, branch, or towel",
                    "Throw a flotation device or anything that floats",
                    "Do not enter the water unless you are trained in water rescue",
                    "Once the person is out of the water, check for breathing",
                    "If not breathing, start CPR immediately",
                    "Keep the person warm and monitor them until help arrives",
                ],
                vec![
                    Resource::typed("Emergency Services: 911", "call"),
                    Resource::url("Water Safety Guidelines", "https://www.redcross.org/get-help/how-to-prepare-for-emergencies/types-of-emergencies/water-safety.html"),
                ],
            ),
            image_analysis: Guidance::authored(
                "📸 IMAGE RECEIVED - Treat this as a potential emergency",
                &[
                    "Describe what is happening in the image so guidance can be specific",
                    "Make sure you and others are at a safe distance from any danger",
                    "Check whether anyone is injured, unconscious, or not breathing",
                    "Call emergency services if anyone is in danger",
                    "Do not touch or move anything that looks hazardous",
                    "Stay on the scene until help arrives if it is safe to do so",
                ],
                vec![Resource::typed("Emergency Services: 911", "call")],
            ),
            choking: Guidance::authored(
                "🫁 CHOKING EMERGENCY - Perform the Heimlich maneuver!",
                &[
                    "Ask the person: \"Are you choking?\" If they can cough forcefully, encourage coughing",
                    "If they cannot speak, cough, or breathe, call emergency services",
                    "Stand behind the person and wrap your arms around their waist",
                    "Make a fist and place it just above the navel",
                    "Grasp your fist with the other hand and give quick, upward thrusts",
                    "Repeat thrusts until the object is expelled",
                    "If the person becomes unconscious, lower them to the ground and begin CPR",
                ],
                vec![
                    Resource::typed("Emergency Services: 911", "call"),
                    Resource::url("Choking First Aid", "https://www.redcross.org/take-a-class/first-aid/performing-first-aid/choking"),
                ],
            ),
            gas_leak: Guidance::authored(
                "⚠️ GAS LEAK - Leave the area immediately!",
                &[
                    "Leave the building immediately and get everyone out",
                    "Do not turn any lights or electrical switches on or off",
                    "Do not use phones, lighters, or anything that could cause a spark inside",
                    "Leave doors open behind you to help ventilate the area",
                    "Once at a safe distance, call emergency services or your gas company",
                    "Do not return to the building until authorities say it is safe",
                ],
                vec![
                    Resource::typed("Emergency Services: 911", "call"),
                    Resource::typed("Gas Company Emergency Line", "call"),
                ],
            ),
            general: Guidance::authored(
                "🚨 EMERGENCY ASSISTANCE - Stay calm and assess the situation",
                &[
                    "Stay calm and take a deep breath",
                    "Make sure you are in a safe location",
                    "Check whether anyone is injured",
                    "Call emergency services if anyone is in danger",
                    "Provide clear information about your location",
                    "Follow instructions from emergency responders",
                ],
                vec![Resource::typed("Emergency Services: 911", "call")],
            ),
        }
    }
}

impl Default for GuidanceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
