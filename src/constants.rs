// Unit conversions between droplet geometry scales
pub const UM_TO_CM: f64 = 1.0e-4; // micrometers to centimeters
pub const UM_TO_NM: f64 = 1.0e3; // micrometers to nanometers
pub const NM_TO_CM: f64 = 1.0e-7; // nanometers to centimeters
pub const CM3_TO_PL: f64 = 1.0e9; // cubic centimeters (mL) to picoliters
pub const SECONDS_PER_MINUTE: f64 = 60.0;

// Empirical diffusivity of dsDNA vs length, Lukacs et al., J Biol Chem 2000
// D = 4.9e-6 * bp^-0.72 (cm²/s)
pub const DIFFUSIVITY_COEFF_CM2_PER_S: f64 = 4.9e-6;
pub const DIFFUSIVITY_BP_EXPONENT: f64 = -0.72;

// Double-stranded DNA molecular weight approximation (Daltons)
// mw = 2 * bp * 607.4 + 157.9
pub const DS_DNA_DALTONS_PER_BP: f64 = 607.4;
pub const DS_DNA_DALTONS_OFFSET: f64 = 157.9;

// Hydrophobic footprint radius of an adsorbed amplicon from its molecular
// weight: r_nm = 0.066 * mw^(1/3)
pub const HYDROPHOBIC_RADIUS_COEFF_NM: f64 = 0.066;

// Interfacial concentration to amplicon count over the droplet surface
pub const CONCENTRATION_TO_AMPLICONS: f64 = 1.0e-14;

// Saturation threshold; per-class coverage ratios are summed and compared
// against this percent-equivalent limit
pub const SATURATION_LIMIT_PCT: f64 = 100.0;

// Default sim settings. The ceilings guard against non-convergent runs and
// differ by growth mode; both are tunable pending calibration against
// measured saturation curves, as is the logistic rate constant.
pub const DEFAULT_MAX_SECONDS_EXPONENTIAL: u32 = 600;
pub const DEFAULT_MAX_SECONDS_LOGISTIC: u32 = 1800;
pub const DEFAULT_LOGISTIC_RATE: f64 = 1.0;

// Default droplet-diameter measurement file consumed by the CLI
pub const DEFAULT_DIAMETER_FILE: &str = "dropletDiameters.csv";
pub const DIAMETER_COLUMN_HEADER: &str = "Diameter (um)";
