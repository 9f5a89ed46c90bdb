//! Fixed choices offered by the profile form.

/// Country select options. The stored value is the name itself.
pub const COUNTRIES: [&str; 244] = [
    "Afghanistan",
    "Åland Islands",
    "Albania",
    "Algeria",
    "American Samoa",
    "Andorra",
    "Angola",
    "Anguilla",
    "Antarctica",
    "Antigua and Barbuda",
    "Argentina",
    "Armenia",
    "Aruba",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahamas",
    "Bahrain",
    "Bangladesh",
    "Barbados",
    "Belarus",
    "Belgium",
    "Belize",
    "Benin",
    "Bermuda",
    "Bhutan",
    "Bolivia",
    "Bosnia and Herzegovina",
    "Botswana",
    "Bouvet Island",
    "Brazil",
    "British Indian Ocean Territory",
    "Brunei Darussalam",
    "Bulgaria",
    "Burkina Faso",
    "Burundi",
    "Cambodia",
    "Cameroon",
    "Canada",
    "Cape Verde",
    "Cayman Islands",
    "Central African Republic",
    "Chad",
    "Chile",
    "China",
    "Christmas Island",
    "Cocos (Keeling) Islands",
    "Colombia",
    "Comoros",
    "Congo",
    "Congo, The Democratic Republic of The",
    "Cook Islands",
    "Costa Rica",
    "Cote D'ivoire",
    "Croatia",
    "Cuba",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Djibouti",
    "Dominica",
    "Dominican Republic",
    "Ecuador",
    "Egypt",
    "El Salvador",
    "Equatorial Guinea",
    "Eritrea",
    "Estonia",
    "Ethiopia",
    "Falkland Islands (Malvinas)",
    "Faroe Islands",
    "Fiji",
    "Finland",
    "France",
    "French Guiana",
    "French Polynesia",
    "French Southern Territories",
    "Gabon",
    "Gambia",
    "Georgia",
    "Germany",
    "Ghana",
    "Gibraltar",
    "Greece",
    "Greenland",
    "Grenada",
    "Guadeloupe",
    "Guam",
    "Guatemala",
    "Guernsey",
    "Guinea",
    "Guinea-bissau",
    "Guyana",
    "Haiti",
    "Heard Island and Mcdonald Islands",
    "Holy See (Vatican City State)",
    "Honduras",
    "Hong Kong",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Iran, Islamic Republic of",
    "Iraq",
    "Ireland",
    "Isle of Man",
    "Israel",
    "Italy",
    "Jamaica",
    "Japan",
    "Jersey",
    "Jordan",
    "Kazakhstan",
    "Kenya",
    "Kiribati",
    "Korea, Democratic People's Republic of",
    "Korea, Republic of",
    "Kuwait",
    "Kyrgyzstan",
    "Lao People's Democratic Republic",
    "Latvia",
    "Lebanon",
    "Lesotho",
    "Liberia",
    "Libyan Arab Jamahiriya",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Macao",
    "Macedonia, The Former Yugoslav Republic of",
    "Madagascar",
    "Malawi",
    "Malaysia",
    "Maldives",
    "Mali",
    "Malta",
    "Marshall Islands",
    "Martinique",
    "Mauritania",
    "Mauritius",
    "Mayotte",
    "Mexico",
    "Micronesia, Federated States of",
    "Moldova, Republic of",
    "Monaco",
    "Mongolia",
    "Montenegro",
    "Montserrat",
    "Morocco",
    "Mozambique",
    "Myanmar",
    "Namibia",
    "Nauru",
    "Nepal",
    "Netherlands",
    "Netherlands Antilles",
    "New Caledonia",
    "New Zealand",
    "Nicaragua",
    "Niger",
    "Nigeria",
    "Niue",
    "Norfolk Island",
    "Northern Mariana Islands",
    "Norway",
    "Oman",
    "Pakistan",
    "Palau",
    "Palestinian Territory, Occupied",
    "Panama",
    "Papua New Guinea",
    "Paraguay",
    "Peru",
    "Philippines",
    "Pitcairn",
    "Poland",
    "Portugal",
    "Puerto Rico",
    "Qatar",
    "Reunion",
    "Romania",
    "Russian Federation",
    "Rwanda",
    "Saint Helena",
    "Saint Kitts and Nevis",
    "Saint Lucia",
    "Saint Pierre and Miquelon",
    "Saint Vincent and The Grenadines",
    "Samoa",
    "San Marino",
    "Sao Tome and Principe",
    "Saudi Arabia",
    "Senegal",
    "Serbia",
    "Seychelles",
    "Sierra Leone",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "Solomon Islands",
    "Somalia",
    "South Africa",
    "South Georgia and The South Sandwich Islands",
    "Spain",
    "Sri Lanka",
    "Sudan",
    "Suriname",
    "Svalbard and Jan Mayen",
    "Swaziland",
    "Sweden",
    "Switzerland",
    "Syrian Arab Republic",
    "Taiwan",
    "Tajikistan",
    "Tanzania, United Republic of",
    "Thailand",
    "Timor-leste",
    "Togo",
    "Tokelau",
    "Tonga",
    "Trinidad and Tobago",
    "Tunisia",
    "Turkey",
    "Turkmenistan",
    "Turks and Caicos Islands",
    "Tuvalu",
    "Uganda",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "United States Minor Outlying Islands",
    "Uruguay",
    "Uzbekistan",
    "Vanuatu",
    "Venezuela",
    "Viet Nam",
    "Virgin Islands, British",
    "Virgin Islands, U.S.",
    "Wallis and Futuna",
    "Western Sahara",
    "Yemen",
    "Zambia",
    "Zimbabwe",
];

/// Timezone select options as `(value, label)`. The value is what gets
/// stored; half and three-quarter hours are written as decimal minutes
/// (`+05:50` is GMT +5:30).
pub const TIMEZONES: [(&str, &str); 40] = [
    ("-12:00", "(GMT -12:00) Eniwetok, Kwajalein"),
    ("-11:00", "(GMT -11:00) Midway Island, Samoa"),
    ("-10:00", "(GMT -10:00) Hawaii"),
    ("-09:50", "(GMT -9:30) Taiohae"),
    ("-09:00", "(GMT -9:00) Alaska"),
    ("-08:00", "(GMT -8:00) Pacific Time (US & Canada)"),
    ("-07:00", "(GMT -7:00) Mountain Time (US & Canada)"),
    ("-06:00", "(GMT -6:00) Central Time (US & Canada), Mexico City"),
    ("-05:00", "(GMT -5:00) Eastern Time (US & Canada), Bogota, Lima"),
    ("-04:50", "(GMT -4:30) Caracas"),
    ("-04:00", "(GMT -4:00) Atlantic Time (Canada), Caracas, La Paz"),
    ("-03:50", "(GMT -3:30) Newfoundland"),
    ("-03:00", "(GMT -3:00) Brazil, Buenos Aires, Georgetown"),
    ("-02:00", "(GMT -2:00) Mid-Atlantic"),
    ("-01:00", "(GMT -1:00) Azores, Cape Verde Islands"),
    ("+00:00", "(GMT) Western Europe Time, London, Lisbon, Casablanca"),
    ("+01:00", "(GMT +1:00) Brussels, Copenhagen, Madrid, Paris"),
    ("+02:00", "(GMT +2:00) Kaliningrad, South Africa"),
    ("+03:00", "(GMT +3:00) Baghdad, Riyadh, Moscow, St. Petersburg"),
    ("+03:50", "(GMT +3:30) Tehran"),
    ("+04:00", "(GMT +4:00) Abu Dhabi, Muscat, Baku, Tbilisi"),
    ("+04:50", "(GMT +4:30) Kabul"),
    ("+05:00", "(GMT +5:00) Ekaterinburg, Islamabad, Karachi, Tashkent"),
    ("+05:50", "(GMT +5:30) Bombay, Calcutta, Madras, New Delhi"),
    ("+05:75", "(GMT +5:45) Kathmandu, Pokhara"),
    ("+06:00", "(GMT +6:00) Almaty, Dhaka, Colombo"),
    ("+06:50", "(GMT +6:30) Yangon, Mandalay"),
    ("+07:00", "(GMT +7:00) Bangkok, Hanoi, Jakarta"),
    ("+08:00", "(GMT +8:00) Beijing, Perth, Singapore, Hong Kong"),
    ("+08:75", "(GMT +8:45) Eucla"),
    ("+09:00", "(GMT +9:00) Tokyo, Seoul, Osaka, Sapporo, Yakutsk"),
    ("+09:50", "(GMT +9:30) Adelaide, Darwin"),
    ("+10:00", "(GMT +10:00) Eastern Australia, Guam, Vladivostok"),
    ("+10:50", "(GMT +10:30) Lord Howe Island"),
    ("+11:00", "(GMT +11:00) Magadan, Solomon Islands, New Caledonia"),
    ("+11:50", "(GMT +11:30) Norfolk Island"),
    ("+12:00", "(GMT +12:00) Auckland, Wellington, Fiji, Kamchatka"),
    ("+12:75", "(GMT +12:45) Chatham Islands"),
    ("+13:00", "(GMT +13:00) Apia, Nukualofa"),
    ("+14:00", "(GMT +14:00) Line Islands, Tokelau"),
];

pub fn is_country(value: &str) -> bool {
    COUNTRIES.contains(&value)
}

pub fn timezone_label(value: &str) -> Option<&'static str> {
    TIMEZONES
        .iter()
        .find(|(option, _)| *option == value)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_found_by_value() {
        assert_eq!(
            Some("(GMT +5:30) Bombay, Calcutta, Madras, New Delhi"),
            timezone_label("+05:50")
        );
        assert_eq!(None, timezone_label("+05:30"));
    }

    #[test]
    fn values_are_unique() {
        let mut values: Vec<_> = TIMEZONES.iter().map(|(value, _)| *value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(TIMEZONES.len(), values.len());
    }

    #[test]
    fn countries_run_from_afghanistan_to_zimbabwe() {
        assert_eq!(Some(&"Afghanistan"), COUNTRIES.first());
        assert_eq!(Some(&"Zimbabwe"), COUNTRIES.last());
        assert!(is_country("Åland Islands"));
        assert!(is_country("United Kingdom"));
        assert!(!is_country(""));

        let mut values = COUNTRIES.to_vec();
        values.sort_unstable();
        values.dedup();
        assert_eq!(COUNTRIES.len(), values.len());
    }
}
