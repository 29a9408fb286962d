//! 本土省份（département）参考数据
//!
//! 源站只覆盖本土 94 个省份（不含科西嘉），按代码升序排列。

/// 省份
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Department {
    /// 两位省份代码
    pub code: &'static str,
    /// 显示名称
    pub name: &'static str,
    /// 土地查询使用的大区名称
    pub region_url: &'static str,
    /// URL 中使用的省份名称
    pub name_url: &'static str,
}

impl Department {
    const fn new(
        code: &'static str,
        name: &'static str,
        region_url: &'static str,
        name_url: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            region_url,
            name_url,
        }
    }

    /// 按代码查找省份
    pub fn by_code(code: &str) -> Option<&'static Department> {
        DEPARTMENTS.iter().find(|d| d.code == code.trim())
    }
}

/// 全部本土省份
pub static DEPARTMENTS: &[Department] = &[
    Department::new("01", "Ain", "Auvergne-Rhône-Alpes", "Ain"),
    Department::new("02", "Aisne", "Hauts-de-France", "Aisne"),
    Department::new("03", "Allier", "Auvergne-Rhône-Alpes", "Allier"),
    Department::new("04", "Alpes-de-Haute-Provence", "Provence-Alpes-Côte d'Azur", "Alpes-de-Haute-Provence"),
    Department::new("05", "Hautes-Alpes", "Provence-Alpes-Côte d'Azur", "Hautes-Alpes"),
    Department::new("06", "Alpes-Maritimes", "Provence-Alpes-Côte d'Azur", "Alpes-Maritimes"),
    Department::new("07", "Ardèche", "Auvergne-Rhône-Alpes", "Ardèche"),
    Department::new("08", "Ardennes", "Grand Est", "Ardennes"),
    Department::new("09", "Ariège", "Occitanie", "Ariège"),
    Department::new("10", "Aube", "Grand Est", "Aube"),
    Department::new("11", "Aude", "Occitanie", "Aude"),
    Department::new("12", "Aveyron", "Occitanie", "Aveyron"),
    Department::new("13", "Bouches-du-Rhône", "Provence-Alpes-Côte d'Azur", "Bouches-du-Rhône"),
    Department::new("14", "Calvados", "Normandie", "Calvados"),
    Department::new("15", "Cantal", "Auvergne-Rhône-Alpes", "Cantal"),
    Department::new("16", "Charente", "Nouvelle-Aquitaine", "Charente"),
    Department::new("17", "Charente-Maritime", "Nouvelle-Aquitaine", "Charente-Maritime"),
    Department::new("18", "Cher", "Centre-Val de Loire", "Cher"),
    Department::new("19", "Corrèze", "Nouvelle-Aquitaine", "Corrèze"),
    Department::new("21", "Côte-d'Or", "Bourgogne-Franche-Comté", "Côte-d'Or"),
    Department::new("22", "Côtes-d'Armor", "Bretagne", "Côtes-d'Armor"),
    Department::new("23", "Creuse", "Nouvelle-Aquitaine", "Creuse"),
    Department::new("24", "Dordogne", "Nouvelle-Aquitaine", "Dordogne"),
    Department::new("25", "Doubs", "Bourgogne-Franche-Comté", "Doubs"),
    Department::new("26", "Drôme", "Auvergne-Rhône-Alpes", "Drôme"),
    Department::new("27", "Eure", "Normandie", "Eure"),
    Department::new("28", "Eure-et-Loir", "Centre-Val de Loire", "Eure-et-Loir"),
    Department::new("29", "Finistère", "Bretagne", "Finistère"),
    Department::new("30", "Gard", "Occitanie", "Gard"),
    Department::new("31", "Haute-Garonne", "Occitanie", "Haute-Garonne"),
    Department::new("32", "Gers", "Occitanie", "Gers"),
    Department::new("33", "Gironde", "Nouvelle-Aquitaine", "Gironde"),
    Department::new("34", "Hérault", "Occitanie", "Hérault"),
    Department::new("35", "Ille-et-Vilaine", "Bretagne", "Ille-et-Vilaine"),
    Department::new("36", "Indre", "Centre-Val de Loire", "Indre"),
    Department::new("37", "Indre-et-Loire", "Centre-Val de Loire", "Indre-et-Loire"),
    Department::new("38", "Isère", "Auvergne-Rhône-Alpes", "Isère"),
    Department::new("39", "Jura", "Bourgogne-Franche-Comté", "Jura"),
    Department::new("40", "Landes", "Nouvelle-Aquitaine", "Landes"),
    Department::new("41", "Loir-et-Cher", "Centre-Val de Loire", "Loir-et-Cher"),
    Department::new("42", "Loire", "Auvergne-Rhône-Alpes", "Loire"),
    Department::new("43", "Haute-Loire", "Auvergne-Rhône-Alpes", "Haute-Loire"),
    Department::new("44", "Loire-Atlantique", "Pays de la Loire", "Loire-Atlantique"),
    Department::new("45", "Loiret", "Centre-Val de Loire", "Loiret"),
    Department::new("46", "Lot", "Occitanie", "Lot"),
    Department::new("47", "Lot-et-Garonne", "Nouvelle-Aquitaine", "Lot-et-Garonne"),
    Department::new("48", "Lozère", "Occitanie", "Lozère"),
    Department::new("49", "Maine-et-Loire", "Pays de la Loire", "Maine-et-Loire"),
    Department::new("50", "Manche", "Normandie", "Manche"),
    Department::new("51", "Marne", "Grand Est", "Marne"),
    Department::new("52", "Haute-Marne", "Grand Est", "Haute-Marne"),
    Department::new("53", "Mayenne", "Pays de la Loire", "Mayenne"),
    Department::new("54", "Meurthe-et-Moselle", "Grand Est", "Meurthe-et-Moselle"),
    Department::new("55", "Meuse", "Grand Est", "Meuse"),
    Department::new("56", "Morbihan", "Bretagne", "Morbihan"),
    Department::new("57", "Moselle", "Grand Est", "Moselle"),
    Department::new("58", "Nièvre", "Bourgogne-Franche-Comté", "Nièvre"),
    Department::new("59", "Nord", "Hauts-de-France", "Nord"),
    Department::new("60", "Oise", "Hauts-de-France", "Oise"),
    Department::new("61", "Orne", "Normandie", "Orne"),
    Department::new("62", "Pas-de-Calais", "Hauts-de-France", "Pas-de-Calais"),
    Department::new("63", "Puy-de-Dôme", "Auvergne-Rhône-Alpes", "Puy-de-Dôme"),
    Department::new("64", "Pyrénées-Atlantiques", "Nouvelle-Aquitaine", "Pyrénées-Atlantiques"),
    Department::new("65", "Hautes-Pyrénées", "Occitanie", "Hautes-Pyrénées"),
    Department::new("66", "Pyrénées-Orientales", "Occitanie", "Pyrénées-Orientales"),
    Department::new("67", "Bas-Rhin", "Grand Est", "Bas-Rhin"),
    Department::new("68", "Haut-Rhin", "Grand Est", "Haut-Rhin"),
    Department::new("69", "Rhône", "Auvergne-Rhône-Alpes", "Rhône"),
    Department::new("70", "Haute-Saône", "Bourgogne-Franche-Comté", "Haute-Saône"),
    Department::new("71", "Saône-et-Loire", "Bourgogne-Franche-Comté", "Saône-et-Loire"),
    Department::new("72", "Sarthe", "Pays de la Loire", "Sarthe"),
    Department::new("73", "Savoie", "Auvergne-Rhône-Alpes", "Savoie"),
    Department::new("74", "Haute-Savoie", "Auvergne-Rhône-Alpes", "Haute-Savoie"),
    Department::new("75", "Paris", "Île-de-France", "Paris"),
    Department::new("76", "Seine-Maritime", "Normandie", "Seine-Maritime"),
    Department::new("77", "Seine-et-Marne", "Île-de-France", "Seine-et-Marne"),
    Department::new("78", "Yvelines", "Île-de-France", "Yvelines"),
    Department::new("79", "Deux-Sèvres", "Nouvelle-Aquitaine", "Deux-Sèvres"),
    Department::new("80", "Somme", "Hauts-de-France", "Somme"),
    Department::new("81", "Tarn", "Occitanie", "Tarn"),
    Department::new("82", "Tarn-et-Garonne", "Occitanie", "Tarn-et-Garonne"),
    Department::new("83", "Var", "Provence-Alpes-Côte d'Azur", "Var"),
    Department::new("84", "Vaucluse", "Provence-Alpes-Côte d'Azur", "Vaucluse"),
    Department::new("85", "Vendée", "Pays de la Loire", "Vendée"),
    Department::new("86", "Vienne", "Nouvelle-Aquitaine", "Vienne"),
    Department::new("87", "Haute-Vienne", "Nouvelle-Aquitaine", "Haute-Vienne"),
    Department::new("88", "Vosges", "Grand Est", "Vosges"),
    Department::new("89", "Yonne", "Bourgogne-Franche-Comté", "Yonne"),
    Department::new("90", "Territoire de Belfort", "Bourgogne-Franche-Comté", "Territoire de Belfort"),
    Department::new("91", "Essonne", "Île-de-France", "Essonne"),
    Department::new("92", "Hauts-de-Seine", "Île-de-France", "Hauts-de-Seine"),
    Department::new("93", "Seine-Saint-Denis", "Île-de-France", "Seine-Saint-Denis"),
    Department::new("94", "Val-de-Marne", "Île-de-France", "Val-de-Marne"),
    Department::new("95", "Val-d'Oise", "Île-de-France", "Val-d'Oise"),
];
