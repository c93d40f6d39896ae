//! Predefined cultures.
//!
//! Non-ASCII characters are written as escapes.

use super::{Culture, DEFAULT_TWO_DIGIT_YEAR_MAX};

pub(super) struct CultureData {
    name: &'static str,
    months: [&'static str; 12],
    abbreviated_months: [&'static str; 12],
    days: [&'static str; 7],
    abbreviated_days: [&'static str; 7],
    am: &'static str,
    pm: &'static str,
    date_separator: &'static str,
    short_date: &'static str,
    long_date: &'static str,
    short_time: &'static str,
    long_time: &'static str,
    month_day: &'static str,
    year_month: &'static str,
}

impl CultureData {
    pub(super) fn to_culture(&self) -> Culture {
        Culture {
            name: self.name.to_string(),
            month_names: self.months.map(String::from),
            abbreviated_month_names: self.abbreviated_months.map(String::from),
            day_names: self.days.map(String::from),
            abbreviated_day_names: self.abbreviated_days.map(String::from),
            am_designator: self.am.to_string(),
            pm_designator: self.pm.to_string(),
            date_separator: self.date_separator.to_string(),
            time_separator: ":".to_string(),
            short_date_pattern: self.short_date.to_string(),
            long_date_pattern: self.long_date.to_string(),
            short_time_pattern: self.short_time.to_string(),
            long_time_pattern: self.long_time.to_string(),
            month_day_pattern: self.month_day.to_string(),
            year_month_pattern: self.year_month.to_string(),
            two_digit_year_max: DEFAULT_TWO_DIGIT_YEAR_MAX,
        }
    }
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const ENGLISH_ABBREVIATED_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const ENGLISH_DAYS: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];
const ENGLISH_ABBREVIATED_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// Invariant must stay first.
pub(super) const ALL: &[CultureData] = &[
    CultureData {
        name: "invariant",
        months: ENGLISH_MONTHS,
        abbreviated_months: ENGLISH_ABBREVIATED_MONTHS,
        days: ENGLISH_DAYS,
        abbreviated_days: ENGLISH_ABBREVIATED_DAYS,
        am: "AM",
        pm: "PM",
        date_separator: "/",
        short_date: "MM/dd/yyyy",
        long_date: "dddd, dd MMMM yyyy",
        short_time: "HH:mm",
        long_time: "HH:mm:ss",
        month_day: "MMMM dd",
        year_month: "yyyy MMMM",
    },
    CultureData {
        name: "en-US",
        months: ENGLISH_MONTHS,
        abbreviated_months: ENGLISH_ABBREVIATED_MONTHS,
        days: ENGLISH_DAYS,
        abbreviated_days: ENGLISH_ABBREVIATED_DAYS,
        am: "AM",
        pm: "PM",
        date_separator: "/",
        short_date: "M/d/yyyy",
        long_date: "dddd, MMMM d, yyyy",
        short_time: "h:mm tt",
        long_time: "h:mm:ss tt",
        month_day: "MMMM d",
        year_month: "MMMM yyyy",
    },
    CultureData {
        name: "en-GB",
        months: ENGLISH_MONTHS,
        abbreviated_months: ENGLISH_ABBREVIATED_MONTHS,
        days: ENGLISH_DAYS,
        abbreviated_days: ENGLISH_ABBREVIATED_DAYS,
        am: "am",
        pm: "pm",
        date_separator: "/",
        short_date: "dd/MM/yyyy",
        long_date: "dddd, d MMMM yyyy",
        short_time: "HH:mm",
        long_time: "HH:mm:ss",
        month_day: "d MMMM",
        year_month: "MMMM yyyy",
    },
    CultureData {
        name: "es-ES",
        months: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
        abbreviated_months: [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
        ],
        days: [
            "domingo", "lunes", "martes", "mi\u{e9}rcoles", "jueves", "viernes", "s\u{e1}bado",
        ],
        abbreviated_days: ["dom", "lun", "mar", "mi\u{e9}", "jue", "vie", "s\u{e1}b"],
        am: "a. m.",
        pm: "p. m.",
        date_separator: "/",
        short_date: "dd/MM/yyyy",
        long_date: "dddd, d 'de' MMMM 'de' yyyy",
        short_time: "H:mm",
        long_time: "H:mm:ss",
        month_day: "d 'de' MMMM",
        year_month: "MMMM 'de' yyyy",
    },
    CultureData {
        name: "it-IT",
        months: [
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
            "settembre", "ottobre", "novembre", "dicembre",
        ],
        abbreviated_months: [
            "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
        ],
        days: [
            "domenica",
            "luned\u{ec}",
            "marted\u{ec}",
            "mercoled\u{ec}",
            "gioved\u{ec}",
            "venerd\u{ec}",
            "sabato",
        ],
        abbreviated_days: ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
        am: "AM",
        pm: "PM",
        date_separator: "/",
        short_date: "dd/MM/yyyy",
        long_date: "dddd d MMMM yyyy",
        short_time: "HH:mm",
        long_time: "HH:mm:ss",
        month_day: "d MMMM",
        year_month: "MMMM yyyy",
    },
    CultureData {
        name: "fr-FR",
        months: [
            "janvier",
            "f\u{e9}vrier",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "ao\u{fb}t",
            "septembre",
            "octobre",
            "novembre",
            "d\u{e9}cembre",
        ],
        abbreviated_months: [
            "janv.",
            "f\u{e9}vr.",
            "mars",
            "avr.",
            "mai",
            "juin",
            "juil.",
            "ao\u{fb}t",
            "sept.",
            "oct.",
            "nov.",
            "d\u{e9}c.",
        ],
        days: [
            "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
        ],
        abbreviated_days: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
        am: "AM",
        pm: "PM",
        date_separator: "/",
        short_date: "dd/MM/yyyy",
        long_date: "dddd d MMMM yyyy",
        short_time: "HH:mm",
        long_time: "HH:mm:ss",
        month_day: "d MMMM",
        year_month: "MMMM yyyy",
    },
    CultureData {
        name: "de-DE",
        months: [
            "Januar",
            "Februar",
            "M\u{e4}rz",
            "April",
            "Mai",
            "Juni",
            "Juli",
            "August",
            "September",
            "Oktober",
            "November",
            "Dezember",
        ],
        abbreviated_months: [
            "Jan.",
            "Feb.",
            "M\u{e4}rz",
            "Apr.",
            "Mai",
            "Juni",
            "Juli",
            "Aug.",
            "Sept.",
            "Okt.",
            "Nov.",
            "Dez.",
        ],
        days: [
            "Sonntag",
            "Montag",
            "Dienstag",
            "Mittwoch",
            "Donnerstag",
            "Freitag",
            "Samstag",
        ],
        abbreviated_days: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
        am: "AM",
        pm: "PM",
        date_separator: ".",
        short_date: "dd.MM.yyyy",
        long_date: "dddd, d. MMMM yyyy",
        short_time: "HH:mm",
        long_time: "HH:mm:ss",
        month_day: "d. MMMM",
        year_month: "MMMM yyyy",
    },
];
