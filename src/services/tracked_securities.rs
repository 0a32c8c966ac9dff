//! Securities tracked from the BSE bhavcopy. Names must match the
//! `FinInstrmNm` column exactly (the exchange truncates long names to 30
//! characters).

pub const TRACKED_SECURITIES: [&str; 100] = [
    "LG Electronics India Limited",
    "Nippon India Mutual Fund - Per",
    "TATA INVESTMENT CORPORATION LT",
    "TIMKEN INDIA LTD.",
    "ICICI BANK LTD.",
    "G.M.BREWERIES LTD.",
    "SANDUR MANGANESE & IRON ORES L",
    "RELIANCE INDUSTRIES LTD.",
    "LARSEN & TOUBRO LTD.",
    "ICICI Lombard General Insuranc",
    "NIPPON INDIA ETF GOLD BEES",
    "Thyrocare Technologies Limited",
    "TATA MOTORS LTD.",
    "National Securities Depository",
    "Stallion India Fluorochemicals",
    "TATA CONSULTANCY SERVICES LTD.",
    "TATA COMMUNICATIONS LTD.",
    "SWIGGY LIMITED",
    "MULTI COMMODITY EXCHANGE OF IN",
    "PERSISTENT SYSTEMS LTD.",
    "HDFC BANK LTD.",
    "ICICI Prudential Mutual Fund",
    "HYUNDAI MOTOR INDIA LIMITED",
    "Bikaji Foods International Lim",
    "HINDUSTAN PETROLEUM CORPORATIO",
    "Waaree Energies Limited",
    "ADANI POWER LTD.",
    "STATE BANK OF INDIA",
    "INFOSYS LTD.",
    "Eternal Limited",
    "VODAFONE IDEA LIMITED",
    "GENESYS INTERNATIONAL CORPORAT",
    "HCL TECHNOLOGIES LTD.",
    "Tata Capital Limited",
    "BAJAJ FINANCE LIMITED",
    "NETWEB TECHNOLOGIES INDIA LIMI",
    "WAAREE RENEWABLE TECHNOLOGIES",
    "POWER FINANCE CORPORATION LTD.",
    "Hindustan Aeronautics Limited",
    "BANK OF MAHARASHTRA",
    "SUZLON ENERGY LTD.",
    "BHARTI AIRTEL LTD.",
    "BAJAJ FINSERV LTD.",
    "ANGEL ONE LIMITED",
    "Apollo Micro Systems Limited",
    "ANANT RAJ LIMITED",
    "FEDERAL BANK LTD.",
    "RBL Bank Limited",
    "NIPPON INDIA ETF NIFTY BEES",
    "Urban Company Limited",
    "VEDANTA LIMITED",
    "Jio Financial Services Limited",
    "RIR POWER ELECTRONICS LIMITED",
    "SPICEJET LTD.",
    "Garden Reach Shipbuilders & En",
    "One 97 Communications Limited",
    "Quick Heal Technologies Limite",
    "AXIS BANK LTD.",
    "TECH MAHINDRA LTD.",
    "NIPPON INDIA ETF LIQUID BEES",
    "Tatva Chintan Pharma Chem Limi",
    "MOSCHIP TECHNOLOGIES LIMITED",
    "HDFC Asset Management Company",
    "Dixon Technologies (India) Lim",
    "TRENT LTD.",
    "HINDALCO INDUSTRIES LTD.",
    "COLAB PLATFORMS LIMITED",
    "Zerodha Mutual Fund",
    "HDFC Mutual Fund",
    "GODFREY PHILLIPS INDIA LTD.",
    "PUNJAB NATIONAL BANK",
    "MTAR Technologies Limited",
    "BHARAT ELECTRONICS LTD.",
    "HINDUSTAN COPPER LTD.",
    "Indian Renewable Energy Develo",
    "RELIANCE POWER LTD.",
    "Sona BLW Precision Forgings Li",
    "YES BANK LTD.",
    "Newgen Software Technologies L",
    "SAMPRE NUTRITIONS LTD.",
    "ADANI PORTS AND SPECIAL ECONOM",
    "HERO MOTOCORP LTD.",
    "Ather Energy Limited",
    "MAHINDRA & MAHINDRA LTD.",
    "Cochin Shipyard Limited",
    "ITC LTD.",
    "HINDUSTAN UNILEVER LTD.",
    "PETRONET LNG LTD.",
    "BEML LTD.",
    "ITC Hotels Limited",
    "TITAN COMPANY LIMITED",
    "ABBOTT INDIA LTD.",
    "Adani Green Energy Limited",
    "COFORGE LIMITED",
    "Vikram Solar Limited",
    "DSM Fresh Foods Limited",
    "AVANTEL LTD.",
    "TATA POWER CO.LTD.",
    "Tejas Networks Limited",
    "DLF LTD.",
];

pub fn is_tracked(name: &str) -> bool {
    TRACKED_SECURITIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_names() {
        let unique: HashSet<_> = TRACKED_SECURITIES.iter().collect();
        assert_eq!(unique.len(), TRACKED_SECURITIES.len());
    }

    #[test]
    fn test_match_is_exact() {
        assert!(is_tracked("RELIANCE INDUSTRIES LTD."));
        assert!(!is_tracked("reliance industries ltd."));
        assert!(!is_tracked("RELIANCE INDUSTRIES LTD"));
        assert!(!is_tracked(""));
    }
}
