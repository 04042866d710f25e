//! GEDCOM documents shared by unit tests.

use crate::model::Genealogy;

/// Two generations: H1+W1 have C1; C1+W2 have C2 and C3.
pub const TWO_GENERATIONS: &str = "\
0 HEAD
1 CHAR UTF-8
0 @H1@ INDI
1 NAME Henry /Hall/
1 FAMS @F1@
0 @W1@ INDI
1 NAME Wilma /West/
1 FAMS @F1@
0 @C1@ INDI
1 NAME Carl /Hall/
1 FAMC @F1@
1 FAMS @F2@
0 @W2@ INDI
1 NAME Wendy /Ward/
1 FAMS @F2@
0 @C2@ INDI
1 NAME Cora /Hall/
1 FAMC @F2@
0 @C3@ INDI
1 NAME Cole /Hall/
1 FAMC @F2@
0 @F1@ FAM
1 HUSB @H1@
1 WIFE @W1@
1 CHIL @C1@
0 @F2@ FAM
1 HUSB @C1@
1 WIFE @W2@
1 CHIL @C2@
1 CHIL @C3@
0 TRLR
";

/// Four generations with two branches, for ancestor and cousin queries.
///
/// GP1+GP2 (F0) have A and B. A+SA (FA) have X; SB+B (FB) have Y.
/// X+XS (FX) have X1; YS+Y (FY) have Y1.
pub const KENNEDY_BRANCHES: &str = "\
0 HEAD
1 SOUR gedchart
1 GEDC
2 VERS 5.5.1
2 FORM LINEAGE-LINKED
0 @GP1@ INDI
1 NAME Patrick /Kennedy/
1 SEX M
1 FAMS @F0@
0 @GP2@ INDI
1 NAME Mary /Hickey/
1 SEX F
1 FAMS @F0@
0 @A@ INDI
1 NAME Joseph /Kennedy/ Sr
1 BIRT
2 DATE 6 SEP 1888
2 PLAC Boston, MA
1 DEAT
2 DATE 18 NOV 1969
1 FAMC @F0@
1 FAMS @FA@
0 @SA@ INDI
1 NAME Rose /Fitzgerald/
1 FAMS @FA@
0 @B@ INDI
1 NAME Loretta /Kennedy/
1 FAMC @F0@
1 FAMS @FB@
0 @SB@ INDI
1 NAME George /Connelly/
1 FAMS @FB@
0 @X@ INDI
1 NAME John /Kennedy/
1 FAMC @FA@
1 FAMS @FX@
0 @XS@ INDI
1 NAME Jacqueline /Bouvier/
1 FAMS @FX@
0 @Y@ INDI
1 NAME Mary Lou /Connelly/
1 FAMC @FB@
1 FAMS @FY@
0 @YS@ INDI
1 NAME Richard /Roe/
1 FAMS @FY@
0 @X1@ INDI
1 NAME Caroline /Kennedy/
1 FAMC @FX@
0 @Y1@ INDI
1 NAME Ann /Roe/
1 FAMC @FY@
0 @F0@ FAM
1 HUSB @GP1@
1 WIFE @GP2@
1 CHIL @A@
1 CHIL @B@
0 @FA@ FAM
1 HUSB @A@
1 WIFE @SA@
1 MARR
2 DATE 7 OCT 1914
2 PLAC Boston, MA
1 CHIL @X@
0 @FB@ FAM
1 HUSB @SB@
1 WIFE @B@
1 CHIL @Y@
0 @FX@ FAM
1 HUSB @X@
1 WIFE @XS@
1 CHIL @X1@
0 @FY@ FAM
1 HUSB @YS@
1 WIFE @Y@
1 CHIL @Y1@
0 TRLR
";

pub fn genealogy(source: &str) -> Genealogy {
    crate::gedcom::parse_str(source).expect("fixture should parse")
}
