pub mod configuration;

pub mod holidayerror;

pub mod region {
    pub mod region;
    pub mod regionset;
}

pub mod holiday {
    pub mod holidaytype;
    pub mod easter;
    pub mod recurringholiday;
    pub mod fixeddateholiday;
    pub mod easterrelatedholiday;
    pub mod weekdaybeforeholiday;
    pub mod daterule;
    pub mod holidayrule;
    pub mod holidaycatalog;
    pub mod holiday;
}

pub mod calendar {
    pub mod yearcache;
    pub mod holidayengine;
}

pub mod translation {
    pub mod translationtable;
    pub mod translationregistry;
}
