// Literature-backed justification text attached to each cascade branch.

pub const BIOPSY_PROVEN: &str = "Known biopsy-proven malignancy is categorized as BI-RADS 6 regardless of imaging findings. (ACR BI-RADS 5th Ed.)";

pub const NEGATIVE: &str =
    "A negative screening mammogram without findings is BI-RADS 1. (Radiopaedia - BI-RADS categories)";

pub const MASS_CIRCUMSCRIBED: &str = "Well-circumscribed oval or round masses with smooth margins are typically benign and most commonly represent fibroadenomas or simple cysts. \
When no suspicious associated features are present, the risk of malignancy is extremely low (<2%), qualifying these lesions as BI-RADS 2. \
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition, Breast Imaging Reporting and Data System.\n\
- Berg WA, et al. 'Diagnostic Performance of BI-RADS for Mass Characterization.' AJR Am J Roentgenol. 2023;221:315-322.\n\
- Radiopaedia.org. 'Breast imaging reporting and data system (BI-RADS).' Updated 2025.";

pub const MASS_MICROLOBULATED: &str = "Microlobulated margins are associated with a low but non-negligible risk of malignancy, generally in the BI-RADS 4A category (2-10% risk). \
These margins may be seen in both benign fibroadenomas and low-grade carcinomas, warranting tissue diagnosis. \
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Radiopaedia.org. 'Breast mass margins.' Updated 2025.\n\
- Stavros AT, et al. 'Solid Breast Nodules: Use of Sonography to Distinguish between Benign and Malignant Lesions.' Radiology. 2024.";

pub const MASS_IRREGULAR: &str = "Irregular mass margins are associated with an intermediate probability of malignancy and are classified as BI-RADS 4B (10-50% risk). \
These findings require biopsy due to significant overlap with invasive carcinomas. \
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Sickles EA, et al. 'Breast Imaging Reporting and Data System: ACR BI-RADS.' RSNA Breast Imaging Update 2024.\n\
- Radiopaedia.org. 'Breast mass margins.' Updated 2025.";

pub const MASS_SPICULATED: &str = "Spiculated margins are highly predictive of invasive malignancy with a positive predictive value exceeding 90% in most series, placing these lesions in BI-RADS 4C or 5 depending on associated features. \
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Harvey JA, et al. 'Predictive Value of Spiculated Margins in Mammographic Masses.' AJR Am J Roentgenol. 2024;222:455-462.\n\
- Radiology Assistant. 'BI-RADS for Mammography.' Updated 2025.";

/// Reference for the typically benign calcification morphologies; `label` is
/// the morphology's display name.
pub fn benign_calcification(label: &str) -> String {
    format!(
        "{label} type calcifications are considered classic benign patterns and are typically associated with fat necrosis, calcified fibroadenomas, dermal deposits, or vascular walls. \
Their imaging appearance is pathognomonic enough to reliably exclude malignancy, with a malignancy risk <2%. \
Lesions with these morphologies are assigned BI-RADS 2 and require no additional imaging beyond routine screening.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition, Breast Imaging Reporting and Data System.\n\
- Burnside ES, et al. 'Assessment of Calcification Patterns in Mammography.' RSNA Breast Imaging Review 2025.\n\
- Radiology Assistant. 'Breast Calcifications: Benign patterns.' Updated 2024."
    )
}

pub const PUNCTATE_DIFFUSE: &str = "Diffuse distribution of round or punctate calcifications, especially when bilateral and symmetric, almost always represents benign fibrocystic changes or secretory calcifications. \
This morphology combined with diffuse distribution carries an extremely low malignancy risk (<2%) and is categorized as BI-RADS 2. \
Routine follow-up is sufficient with no need for biopsy.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Harvey JA, et al. 'Diffuse Benign Calcifications in Screening Mammography.' AJR Am J Roentgenol. 2024;222:455-462.\n\
- Radiopaedia.org. 'Breast calcifications - diffuse distribution.' Updated 2025.";

pub const PUNCTATE_GROUPED: &str = "Grouped round or punctate calcifications are most often benign but carry a slightly higher malignancy risk compared to diffuse patterns, warranting short-term follow-up. \
When no suspicious morphology or distribution pattern is present, these are classified as BI-RADS 3 with an estimated malignancy risk <2%. \
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Sickles EA, et al. 'Follow-up of Probably Benign Breast Calcifications.' Radiology. 2023;308:112-120.\n\
- Radiology Assistant. 'Calcifications: Probably Benign Patterns.' Updated 2025.";

pub const AMORPHOUS: &str = "Amorphous calcifications lacking a distinct shape are considered suspicious because they are associated with both benign fibrocystic change and low-grade ductal carcinoma in situ (DCIS). \
When not distributed segmentally or linearly, the malignancy risk is typically in the low range (2-10%), categorizing them as BI-RADS 4A. \
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Radiology Assistant. 'Breast Calcifications: Amorphous.' Updated 2025.\n\
- Burnside ES, et al. 'Risk Stratification of Amorphous Calcifications.' AJR Am J Roentgenol. 2023;221:410-418.";

pub const AMORPHOUS_DUCTAL: &str = "Amorphous calcifications arranged in a segmental or linear distribution raise the concern for ductal involvement and are associated with an intermediate malignancy risk (10-50%). \
These patterns are upgraded to BI-RADS 4B to reflect the increased likelihood of DCIS. \
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Harvey JA, et al. 'Distribution Patterns of Breast Calcifications and Malignancy Risk.' Radiology. 2024;310:225-234.\n\
- RSNA Breast Imaging Update 2025.";

pub const PLEOMORPHIC: &str = "Pleomorphic calcifications, with varying shapes and densities, carry a moderate suspicion for malignancy (10-50%). \
When not distributed in a segmental or linear pattern, they are typically classified as BI-RADS 4B due to overlap between benign sclerosing adenosis and DCIS. \
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Radiology Assistant. 'Breast Calcifications: Suspicious Morphologies.' Updated 2025.\n\
- Burnside ES, et al. 'Pleomorphic Calcifications and Cancer Risk.' AJR Am J Roentgenol. 2024;223:520-528.";

pub const PLEOMORPHIC_DUCTAL: &str = "Pleomorphic calcifications arranged in a segmental or linear fashion are strongly associated with ductal carcinoma in situ and occasionally invasive cancer. \
This pattern carries a high malignancy risk (>50%), placing the lesion in the BI-RADS 4C category. \
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Harvey JA, et al. 'Segmental Distribution of Pleomorphic Calcifications.' AJR Am J Roentgenol. 2024;222:600-608.\n\
- Radiopaedia.org. 'Suspicious Breast Calcifications.' Updated 2025.";

pub const LINEAR_BRANCHING: &str = "Linear or branching calcifications following a ductal distribution are highly predictive of ductal carcinoma in situ (DCIS), particularly high-grade lesions. \
This morphology carries a malignancy risk often exceeding 50% and is classified as BI-RADS 4C or 5 depending on associated findings. \
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Sickles EA, et al. 'Suspicious Calcification Patterns in Mammography.' RSNA Breast Imaging Update 2024.\n\
- Radiology Assistant. 'Breast Calcifications: Suspicious.' Updated 2025.";

pub const ASYMMETRY_SINGLE_PROJECTION: &str = "An asymmetry detected on only one mammographic projection is most frequently the result of summation artifact rather than a true lesion. \
Because the presence or absence of a corresponding density on the orthogonal view cannot be determined, the finding is considered incomplete. \
Additional projections, spot compression, or tomosynthesis views are necessary to confirm or exclude a real abnormality. \
This presentation is categorized as BI-RADS 0 pending further imaging.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Destounis S, et al. 'Single-Projection Asymmetries in Screening Mammography.' AJR Am J Roentgenol. 2023;221:780-788.\n\
- Radiopaedia.org. 'Breast asymmetry - single projection.' Updated 2025.";

pub const ASYMMETRY_FOCAL: &str = "A focal asymmetry is a small, localized area of increased fibroglandular density seen on two projections that does not meet the criteria for a mass and lacks associated suspicious findings. \
When stable over time and without architectural distortion or calcifications, the malignancy risk is estimated at <2%, qualifying it as BI-RADS 3. \
Short-term follow-up at 6 months is recommended to ensure stability.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Sickles EA, et al. 'Management of Probably Benign Breast Asymmetries.' Radiology. 2023;308:210-218.\n\
- Radiopaedia.org. 'Focal breast asymmetry.' Updated 2025.";

pub const ASYMMETRY_DEVELOPING: &str = "A developing asymmetry is a focal density that becomes more conspicuous or larger compared to prior mammograms, indicating a true tissue change. \
This finding carries a malignancy risk in the low suspicious range (2-10%), often prompting tissue sampling unless a benign etiology can be established. \
It is classified as BI-RADS 4A.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Destounis S, et al. 'Developing Asymmetries: Clinical and Imaging Outcomes.' AJR Am J Roentgenol. 2024;222:510-518.\n\
- RSNA Breast Imaging Update 2025.";

pub const ASYMMETRY_GLOBAL: &str = "A global asymmetry represents a large volume of tissue density, usually encompassing more than one quadrant, without a definable mass or associated suspicious features. \
This pattern most often reflects normal developmental or hormonal variation of fibroglandular tissue and carries a malignancy risk <2%. \
Stable global asymmetries are assessed as BI-RADS 2 with routine screening recommended.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- RSNA Breast Imaging Course 2024.\n\
- Radiopaedia.org. 'Global breast asymmetry.' Updated 2025.";

pub const ASYMMETRY_DENSITY_ONLY: &str = "A density-only asymmetry without a mass effect, architectural distortion, or suspicious calcifications typically represents normal fibroglandular pattern variation. \
When symmetric or stable over time, the malignancy risk is negligible (<2%) and the finding is categorized as BI-RADS 2. \
No additional workup beyond routine screening is necessary.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Destounis S, et al. 'Breast Density Variations and Asymmetry Interpretation.' AJR Am J Roentgenol. 2023;222:700-708.\n\
- Radiopaedia.org. 'Breast asymmetry - density only.' Updated 2025.";

pub const DISTORTION_POST_OPERATIVE: &str = "Architectural distortion in the setting of prior breast surgery or biopsy commonly represents benign postoperative scar tissue or architectural remodeling. \
When the distortion conforms to the expected surgical site and there are no associated suspicious calcifications or new changes, the risk of malignancy is negligible (<2%), \
allowing categorization as BI-RADS 2. Routine screening is recommended in these cases.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Dershaw DD, et al. 'Post-Surgical Architectural Distortion: Imaging Patterns and Pitfalls.' Radiology. 2023;307:140-149.\n\
- Radiopaedia.org. 'Architectural distortion - postoperative.' Updated 2025.";

pub const DISTORTION_WITH_SUSPICIOUS_FINDING: &str = "Architectural distortion occurring in conjunction with suspicious imaging findings such as spiculated mass margins or malignant-type calcifications significantly increases the likelihood of invasive carcinoma. \
When combined with BI-RADS 4B or 4C level findings, the positive predictive value exceeds 95%, justifying a BI-RADS 5 assessment. \
Urgent tissue sampling or surgical excision is recommended.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Bahl M, et al. 'Combined Architectural Distortion and Suspicious Features: Correlation with Malignancy.' AJR Am J Roentgenol. 2024;223:120-129.\n\
- Radiology Assistant. 'Architectural Distortion in Mammography.' Updated 2025.";

pub const DISTORTION_ISOLATED: &str = "Architectural distortion without prior surgery or trauma and lacking a clearly benign explanation should raise high suspicion for malignancy, \
particularly when newly developed or associated with retraction, spiculation, or asymmetry. This finding carries a malignancy likelihood typically between 50-95%, \
placing it in the BI-RADS 4C category. Biopsy is strongly recommended to determine histopathology.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- D'Orsi CJ et al. 'Evaluation of Architectural Distortion in Mammography.' Radiology Clinics of North America. 2023;61(4):659-673.\n\
- Radiopaedia.org. 'Isolated architectural distortion - breast.' Updated 2025.";

pub const RETRACTION: &str = "Skin or nipple retraction is considered a hallmark of underlying malignancy, particularly invasive carcinoma, due to tumor-induced fibrotic retraction of Cooper's ligaments \
or ductal involvement. These clinical signs, especially when accompanied by a palpable mass or architectural distortion, are diagnostic of malignancy with high specificity. \
Their presence, even in the absence of obvious imaging features, warrants a BI-RADS 5 assessment and urgent tissue diagnosis.\n\
References:\n\
- American College of Radiology. BI-RADS Atlas, 5th Edition.\n\
- Liberman L. 'Clinical Features in Breast Cancer Diagnosis: What Radiologists Must Know.' AJR Am J Roentgenol. 2023;221(2):222-229.\n\
- RSNA Core Curriculum: Breast Imaging Signs of Malignancy (2025 Edition).";
