// Reference catalogs
// Immutable radical/component tables and the glyph normalization map

use crate::types::{CatalogError, IdentityUnit, UnitKind};
use rustc_hash::FxHashMap;

/// One row of the radical table:
/// (Kangxi codepoint form, CJK canonical form, number, strokes, meaning)
pub type RadicalRow = (char, char, u16, u32, &'static str);

/// One row of the component table: (glyph, strokes, meaning)
pub type ComponentRow = (char, u32, &'static str);

/// The 214 Kangxi radicals (U+2F00..=U+2FD5) paired with their CJK
/// Unified Ideograph equivalents.
pub const KANGXI_RADICALS: &[RadicalRow] = &[
    ('⼀', '一', 1, 1, "one"),
    ('⼁', '丨', 2, 1, "line"),
    ('⼂', '丶', 3, 1, "dot"),
    ('⼃', '丿', 4, 1, "slash"),
    ('⼄', '乙', 5, 1, "second"),
    ('⼅', '亅', 6, 1, "hook"),
    ('⼆', '二', 7, 2, "two"),
    ('⼇', '亠', 8, 2, "lid"),
    ('⼈', '人', 9, 2, "man"),
    ('⼉', '儿', 10, 2, "legs"),
    ('⼊', '入', 11, 2, "enter"),
    ('⼋', '八', 12, 2, "eight"),
    ('⼌', '冂', 13, 2, "down box"),
    ('⼍', '冖', 14, 2, "cover"),
    ('⼎', '冫', 15, 2, "ice"),
    ('⼏', '几', 16, 2, "table"),
    ('⼐', '凵', 17, 2, "open box"),
    ('⼑', '刀', 18, 2, "knife"),
    ('⼒', '力', 19, 2, "power"),
    ('⼓', '勹', 20, 2, "wrap"),
    ('⼔', '匕', 21, 2, "spoon"),
    ('⼕', '匚', 22, 2, "right open box"),
    ('⼖', '匸', 23, 2, "hiding enclosure"),
    ('⼗', '十', 24, 2, "ten"),
    ('⼘', '卜', 25, 2, "divination"),
    ('⼙', '卩', 26, 2, "seal"),
    ('⼚', '厂', 27, 2, "cliff"),
    ('⼛', '厶', 28, 2, "private"),
    ('⼜', '又', 29, 2, "again"),
    ('⼝', '口', 30, 3, "mouth"),
    ('⼞', '囗', 31, 3, "enclosure"),
    ('⼟', '土', 32, 3, "earth"),
    ('⼠', '士', 33, 3, "scholar"),
    ('⼡', '夂', 34, 3, "go"),
    ('⼢', '夊', 35, 3, "go slowly"),
    ('⼣', '夕', 36, 3, "evening"),
    ('⼤', '大', 37, 3, "big"),
    ('⼥', '女', 38, 3, "woman"),
    ('⼦', '子', 39, 3, "child"),
    ('⼧', '宀', 40, 3, "roof"),
    ('⼨', '寸', 41, 3, "inch"),
    ('⼩', '小', 42, 3, "small"),
    ('⼪', '尢', 43, 3, "lame"),
    ('⼫', '尸', 44, 3, "corpse"),
    ('⼬', '屮', 45, 3, "sprout"),
    ('⼭', '山', 46, 3, "mountain"),
    ('⼮', '巛', 47, 3, "river"),
    ('⼯', '工', 48, 3, "work"),
    ('⼰', '己', 49, 3, "oneself"),
    ('⼱', '巾', 50, 3, "turban"),
    ('⼲', '干', 51, 3, "dry"),
    ('⼳', '幺', 52, 3, "short thread"),
    ('⼴', '广', 53, 3, "dotted cliff"),
    ('⼵', '廴', 54, 3, "long stride"),
    ('⼶', '廾', 55, 3, "two hands"),
    ('⼷', '弋', 56, 3, "shoot"),
    ('⼸', '弓', 57, 3, "bow"),
    ('⼹', '彐', 58, 3, "snout"),
    ('⼺', '彡', 59, 3, "bristle"),
    ('⼻', '彳', 60, 3, "step"),
    ('⼼', '心', 61, 4, "heart"),
    ('⼽', '戈', 62, 4, "halberd"),
    ('⼾', '戶', 63, 4, "door"),
    ('⼿', '手', 64, 4, "hand"),
    ('⽀', '支', 65, 4, "branch"),
    ('⽁', '攴', 66, 4, "rap"),
    ('⽂', '文', 67, 4, "script"),
    ('⽃', '斗', 68, 4, "dipper"),
    ('⽄', '斤', 69, 4, "axe"),
    ('⽅', '方', 70, 4, "square"),
    ('⽆', '无', 71, 4, "not"),
    ('⽇', '日', 72, 4, "sun"),
    ('⽈', '曰', 73, 4, "say"),
    ('⽉', '月', 74, 4, "moon"),
    ('⽊', '木', 75, 4, "tree"),
    ('⽋', '欠', 76, 4, "lack"),
    ('⽌', '止', 77, 4, "stop"),
    ('⽍', '歹', 78, 4, "death"),
    ('⽎', '殳', 79, 4, "weapon"),
    ('⽏', '毋', 80, 4, "do not"),
    ('⽐', '比', 81, 4, "compare"),
    ('⽑', '毛', 82, 4, "fur"),
    ('⽒', '氏', 83, 4, "clan"),
    ('⽓', '气', 84, 4, "steam"),
    ('⽔', '水', 85, 4, "water"),
    ('⽕', '火', 86, 4, "fire"),
    ('⽖', '爪', 87, 4, "claw"),
    ('⽗', '父', 88, 4, "father"),
    ('⽘', '爻', 89, 4, "double x"),
    ('⽙', '爿', 90, 4, "half tree trunk"),
    ('⽚', '片', 91, 4, "slice"),
    ('⽛', '牙', 92, 4, "fang"),
    ('⽜', '牛', 93, 4, "cow"),
    ('⽝', '犬', 94, 4, "dog"),
    ('⽞', '玄', 95, 5, "profound"),
    ('⽟', '玉', 96, 5, "jade"),
    ('⽠', '瓜', 97, 5, "melon"),
    ('⽡', '瓦', 98, 5, "tile"),
    ('⽢', '甘', 99, 5, "sweet"),
    ('⽣', '生', 100, 5, "life"),
    ('⽤', '用', 101, 5, "use"),
    ('⽥', '田', 102, 5, "field"),
    ('⽦', '疋', 103, 5, "bolt of cloth"),
    ('⽧', '疒', 104, 5, "sickness"),
    ('⽨', '癶', 105, 5, "dotted tent"),
    ('⽩', '白', 106, 5, "white"),
    ('⽪', '皮', 107, 5, "skin"),
    ('⽫', '皿', 108, 5, "dish"),
    ('⽬', '目', 109, 5, "eye"),
    ('⽭', '矛', 110, 5, "spear"),
    ('⽮', '矢', 111, 5, "arrow"),
    ('⽯', '石', 112, 5, "stone"),
    ('⽰', '示', 113, 5, "spirit"),
    ('⽱', '禸', 114, 5, "track"),
    ('⽲', '禾', 115, 5, "grain"),
    ('⽳', '穴', 116, 5, "cave"),
    ('⽴', '立', 117, 5, "stand"),
    ('⽵', '竹', 118, 6, "bamboo"),
    ('⽶', '米', 119, 6, "rice"),
    ('⽷', '糸', 120, 6, "silk"),
    ('⽸', '缶', 121, 6, "jar"),
    ('⽹', '网', 122, 6, "net"),
    ('⽺', '羊', 123, 6, "sheep"),
    ('⽻', '羽', 124, 6, "feather"),
    ('⽼', '老', 125, 6, "old"),
    ('⽽', '而', 126, 6, "and"),
    ('⽾', '耒', 127, 6, "plow"),
    ('⽿', '耳', 128, 6, "ear"),
    ('⾀', '聿', 129, 6, "brush"),
    ('⾁', '肉', 130, 6, "meat"),
    ('⾂', '臣', 131, 6, "minister"),
    ('⾃', '自', 132, 6, "self"),
    ('⾄', '至', 133, 6, "arrive"),
    ('⾅', '臼', 134, 6, "mortar"),
    ('⾆', '舌', 135, 6, "tongue"),
    ('⾇', '舛', 136, 6, "oppose"),
    ('⾈', '舟', 137, 6, "boat"),
    ('⾉', '艮', 138, 6, "stopping"),
    ('⾊', '色', 139, 6, "color"),
    ('⾋', '艸', 140, 6, "grass"),
    ('⾌', '虍', 141, 6, "tiger"),
    ('⾍', '虫', 142, 6, "insect"),
    ('⾎', '血', 143, 6, "blood"),
    ('⾏', '行', 144, 6, "walk"),
    ('⾐', '衣', 145, 6, "clothes"),
    ('⾑', '襾', 146, 6, "west"),
    ('⾒', '見', 147, 7, "see"),
    ('⾓', '角', 148, 7, "horn"),
    ('⾔', '言', 149, 7, "speech"),
    ('⾕', '谷', 150, 7, "valley"),
    ('⾖', '豆', 151, 7, "bean"),
    ('⾗', '豕', 152, 7, "pig"),
    ('⾘', '豸', 153, 7, "badger"),
    ('⾙', '貝', 154, 7, "shell"),
    ('⾚', '赤', 155, 7, "red"),
    ('⾛', '走', 156, 7, "run"),
    ('⾜', '足', 157, 7, "foot"),
    ('⾝', '身', 158, 7, "body"),
    ('⾞', '車', 159, 7, "cart"),
    ('⾟', '辛', 160, 7, "bitter"),
    ('⾠', '辰', 161, 7, "morning"),
    ('⾡', '辵', 162, 7, "walk"),
    ('⾢', '邑', 163, 7, "city"),
    ('⾣', '酉', 164, 7, "wine"),
    ('⾤', '釆', 165, 7, "distinguish"),
    ('⾥', '里', 166, 7, "village"),
    ('⾦', '金', 167, 8, "gold"),
    ('⾧', '長', 168, 8, "long"),
    ('⾨', '門', 169, 8, "gate"),
    ('⾩', '阜', 170, 8, "mound"),
    ('⾪', '隶', 171, 8, "slave"),
    ('⾫', '隹', 172, 8, "short-tailed bird"),
    ('⾬', '雨', 173, 8, "rain"),
    ('⾭', '靑', 174, 8, "blue"),
    ('⾮', '非', 175, 8, "wrong"),
    ('⾯', '面', 176, 9, "face"),
    ('⾰', '革', 177, 9, "leather"),
    ('⾱', '韋', 178, 9, "tanned leather"),
    ('⾲', '韭', 179, 9, "leek"),
    ('⾳', '音', 180, 9, "sound"),
    ('⾴', '頁', 181, 9, "leaf"),
    ('⾵', '風', 182, 9, "wind"),
    ('⾶', '飛', 183, 9, "fly"),
    ('⾷', '食', 184, 9, "eat"),
    ('⾸', '首', 185, 9, "head"),
    ('⾹', '香', 186, 9, "fragrant"),
    ('⾺', '馬', 187, 10, "horse"),
    ('⾻', '骨', 188, 10, "bone"),
    ('⾼', '高', 189, 10, "tall"),
    ('⾽', '髟', 190, 10, "hair"),
    ('⾾', '鬥', 191, 10, "fight"),
    ('⾿', '鬯', 192, 10, "sacrificial wine"),
    ('⿀', '鬲', 193, 10, "cauldron"),
    ('⿁', '鬼', 194, 10, "ghost"),
    ('⿂', '魚', 195, 11, "fish"),
    ('⿃', '鳥', 196, 11, "bird"),
    ('⿄', '鹵', 197, 11, "salt"),
    ('⿅', '鹿', 198, 11, "deer"),
    ('⿆', '麥', 199, 11, "wheat"),
    ('⿇', '麻', 200, 11, "hemp"),
    ('⿈', '黃', 201, 12, "yellow"),
    ('⿉', '黍', 202, 12, "millet"),
    ('⿊', '黑', 203, 12, "black"),
    ('⿋', '黹', 204, 12, "embroidery"),
    ('⿌', '黽', 205, 13, "frog"),
    ('⿍', '鼎', 206, 13, "tripod"),
    ('⿎', '鼓', 207, 13, "drum"),
    ('⿏', '鼠', 208, 13, "rat"),
    ('⿐', '鼻', 209, 14, "nose"),
    ('⿑', '齊', 210, 14, "even"),
    ('⿒', '齒', 211, 15, "tooth"),
    ('⿓', '龍', 212, 16, "dragon"),
    ('⿔', '龜', 213, 16, "turtle"),
    ('⿕', '龠', 214, 17, "flute"),
];

/// Variant glyph forms (simplified, positional, historical) mapped to
/// the canonical CJK form they are semantically identical to.
pub const RADICAL_VARIANTS: &[(char, char)] = &[
    ('亻', '人'), // person radical (left side)
    ('氵', '水'), // water radical (left side)
    ('扌', '手'), // hand radical (left side)
    ('忄', '心'), // heart radical (left side)
    ('犭', '犬'), // dog radical (left side)
    ('礻', '示'), // spirit radical (left side)
    ('衤', '衣'), // clothes radical (left side)
    ('饣', '食'), // food radical (left side)
    ('纟', '糸'), // silk radical (left side)
    ('钅', '金'), // metal radical (left side)
    ('讠', '言'), // speech radical (left side)
    ('辶', '辵'), // walk radical (bottom)
    ('阝', '阜'), // mound radical (left) - also 邑 on right
    ('艹', '艸'), // grass radical (top)
    ('宀', '宀'), // roof
    ('冫', '冫'), // ice
    ('刂', '刀'), // knife radical (right side)
    ('卩', '卩'), // seal
    ('廴', '廴'), // long stride
    ('彳', '彳'), // step
    ('灬', '火'), // fire radical (bottom)
    ('爫', '爪'), // claw radical (top)
    ('疒', '疒'), // sickness
    ('罒', '网'), // net radical (top)
    ('耂', '老'), // old radical variant
    ('月', '肉'), // meat radical (often written as 月)
    ('⺼', '肉'), // meat radical variant
    ('⺍', '小'), // small radical (top)
    ('⺌', '小'), // small radical variant
    ('⺀', '八'), // eight variant
    ('龵', '手'), // hand variant
    ('⺕', '水'), // water variant
    ('⺡', '水'), // water variant
    ('⺗', '心'), // heart variant
    ('⺘', '手'), // hand variant
    ('⺮', '竹'), // bamboo variant
    ('⺶', '羊'), // sheep variant
    ('⺻', '聿'), // brush variant
    ('⺾', '艸'), // grass variant
    ('⻀', '网'), // net variant
    ('⻌', '辵'), // walk variant
    ('⻍', '辵'), // walk variant
    ('⻎', '辵'), // walk variant
    ('⻏', '邑'), // city variant (right side 阝)
    ('⻖', '阜'), // mound variant (left side 阝)
    ('⻗', '雨'), // rain variant
    ('⻘', '靑'), // blue variant
    ('⻙', '靑'), // blue variant
    ('⻟', '食'), // food variant
    ('⻠', '食'), // food variant
    ('⻢', '馬'), // horse variant
    ('⻣', '骨'), // bone variant
    ('⻤', '鬼'), // ghost variant
    ('⻥', '魚'), // fish variant
    ('⻦', '鳥'), // bird variant
    ('⻧', '鹵'), // salt variant
    ('⻨', '麥'), // wheat variant
    ('⻩', '黃'), // yellow variant
    ('⻪', '黃'), // yellow variant
    ('⻫', '齊'), // even variant
    ('⻬', '齊'), // even variant
    ('⻭', '齒'), // tooth variant
    ('⻮', '齒'), // tooth variant
    ('⻯', '龍'), // dragon variant
    ('⻰', '龍'), // dragon variant
    ('⻱', '龜'), // turtle variant
    ('⻲', '龜'), // turtle variant
];

/// Frequently recurring sub-character glyphs outside the radical set,
/// still treated as recognizable building blocks. '月' is listed here
/// as well as in the radical table: it is radical 74 and the visual
/// form the game displays for compressed '肉'.
pub const COMMON_COMPONENTS: &[ComponentRow] = &[
    ('王', 4, "king"),
    ('鱼', 8, "fish"),
    ('鸟', 5, "bird"),
    ('贝', 4, "shell"),
    ('马', 3, "horse"),
    ('车', 4, "cart"),
    ('门', 3, "gate"),
    ('页', 6, "page"),
    ('见', 4, "see"),
    ('韦', 4, "leather"),
    ('长', 4, "long"),
    ('风', 4, "wind"),
    ('飞', 3, "fly"),
    ('分', 4, "divide"),
    ('合', 6, "combine"),
    ('且', 5, "moreover"),
    ('令', 5, "order"),
    ('占', 5, "occupy"),
    ('各', 6, "each"),
    ('台', 5, "platform"),
    ('句', 5, "sentence"),
    ('者', 8, "person"),
    ('今', 4, "now"),
    ('包', 5, "wrap"),
    ('青', 8, "blue/green"),
    ('圭', 6, "jade tablet"),
    ('夫', 4, "husband"),
    ('召', 5, "summon"),
    ('交', 6, "exchange"),
    ('其', 8, "its"),
    ('果', 8, "fruit"),
    ('同', 6, "same"),
    ('此', 6, "this"),
    ('古', 5, "ancient"),
    ('可', 5, "can"),
    ('吉', 6, "lucky"),
    ('周', 8, "week"),
    ('元', 4, "origin"),
    ('云', 4, "cloud"),
    ('由', 5, "from"),
    ('也', 3, "also"),
    ('巴', 4, "hope"),
    ('及', 3, "reach"),
    ('反', 4, "reverse"),
    ('央', 5, "center"),
    ('不', 4, "not"),
    ('共', 6, "together"),
    ('半', 5, "half"),
    ('内', 4, "inside"),
    ('公', 4, "public"),
    ('甲', 5, "armor"),
    ('申', 5, "extend"),
    ('乃', 2, "then"),
    ('井', 4, "well"),
    ('丁', 2, "fourth"),
    ('月', 4, "moon"),
];

/// (semantic form, visual display form) pairs treated as equivalent
/// for gameplay matching.
pub const VISUAL_ALIASES: &[(char, char)] = &[
    ('肉', '月'),
    ('心', '忄'),
    ('水', '氵'),
    ('火', '灬'),
    ('手', '扌'),
    ('犬', '犭'),
    ('示', '礻'),
    ('衣', '衤'),
    ('人', '亻'),
    ('刀', '刂'),
    ('艸', '艹'),
    ('网', '罒'),
];

/// Read-only lookup context over the reference tables.
///
/// Built once per run; every recognized glyph form resolves to exactly
/// one [`IdentityUnit`]. The resolution map is filled in priority
/// order (canonical radical forms, then variant forms, then common
/// components), so a glyph claimed at a higher priority shadows
/// any lower-priority entry for the same glyph. This keeps the
/// equivalence classes a partition: '月' resolves to radical 74 even
/// though it also appears as a compressed form of '肉' (the visual
/// alias table records that pairing for gameplay matching).
pub struct Catalog {
    /// All identity units: the 214 radicals followed by the components
    units: Vec<IdentityUnit>,

    /// Recognized glyph form → index into `units`
    by_glyph: FxHashMap<char, usize>,

    /// (semantic form, visual display form) pairs
    aliases: &'static [(char, char)],
}

impl Catalog {
    /// Build the catalog from the built-in reference tables.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if the tables are inconsistent
    /// (a variant or alias pointing at nothing, or two radicals
    /// claiming one form). This is a startup failure, never a
    /// per-record one.
    pub fn new() -> Result<Self, CatalogError> {
        Self::from_tables(
            KANGXI_RADICALS,
            RADICAL_VARIANTS,
            COMMON_COMPONENTS,
            VISUAL_ALIASES,
        )
    }

    /// Build a catalog from explicit tables. [`Catalog::new`] is the
    /// normal entry point; this exists so the consistency checks can be
    /// exercised against deliberately broken tables.
    pub fn from_tables(
        radicals: &[RadicalRow],
        variants: &'static [(char, char)],
        components: &[ComponentRow],
        aliases: &'static [(char, char)],
    ) -> Result<Self, CatalogError> {
        let mut units = Vec::with_capacity(radicals.len() + components.len());
        let mut by_glyph = FxHashMap::default();

        // Priority 1: canonical radical forms (CJK and Kangxi codepoints)
        for &(kangxi, cjk, number, strokes, meaning) in radicals {
            let idx = units.len();
            units.push(IdentityUnit {
                glyph: cjk,
                kangxi: Some(kangxi),
                number: Some(number),
                strokes,
                meaning,
                kind: UnitKind::Radical,
            });
            for form in [cjk, kangxi] {
                if by_glyph.insert(form, idx).is_some() {
                    return Err(CatalogError::DuplicateRadicalForm { glyph: form });
                }
            }
        }

        // Priority 2: variant forms. Targets must already resolve;
        // a variant whose glyph is itself a canonical form is shadowed.
        for &(variant, target) in variants {
            let target_idx = *by_glyph
                .get(&target)
                .ok_or(CatalogError::VariantTargetUnknown { variant, target })?;
            by_glyph.entry(variant).or_insert(target_idx);
        }

        // Priority 3: common components. A component glyph claimed by a
        // radical or variant stays in the unit list (it is exported as
        // a tile) but never wins normalization.
        for &(glyph, strokes, meaning) in components {
            let idx = units.len();
            units.push(IdentityUnit {
                glyph,
                kangxi: None,
                number: None,
                strokes,
                meaning,
                kind: UnitKind::Component,
            });
            by_glyph.entry(glyph).or_insert(idx);
        }

        // Alias pairs must both resolve, and to the same unit unless
        // the visual form is a canonical unit in its own right (肉/月).
        for &(semantic, visual) in aliases {
            let s = *by_glyph
                .get(&semantic)
                .ok_or(CatalogError::AliasNotRecognized { glyph: semantic })?;
            let v = *by_glyph
                .get(&visual)
                .ok_or(CatalogError::AliasNotRecognized { glyph: visual })?;
            if s != v && units[v].glyph != visual {
                return Err(CatalogError::AliasMismatch { semantic, visual });
            }
        }

        Ok(Self {
            units,
            by_glyph,
            aliases,
        })
    }

    /// Normalize a glyph to its identity unit.
    ///
    /// First match wins: canonical radical form, then variant form,
    /// then common component (the priority is baked into the lookup
    /// map at construction). Pure and total; unrecognized glyphs
    /// return `None`, there is no error path.
    ///
    /// # Example
    /// ```
    /// # use hanzi_radicals::Catalog;
    /// let catalog = Catalog::new().unwrap();
    /// assert_eq!(catalog.normalize('氵').unwrap().glyph, '水');
    /// assert_eq!(catalog.normalize('女').unwrap().number, Some(38));
    /// assert!(catalog.normalize('?').is_none());
    /// ```
    pub fn normalize(&self, glyph: char) -> Option<&IdentityUnit> {
        self.by_glyph.get(&glyph).map(|&idx| &self.units[idx])
    }

    /// True if the glyph resolves to any cataloged unit, in any form
    pub fn is_unit(&self, glyph: char) -> bool {
        self.by_glyph.contains_key(&glyph)
    }

    /// Stroke count of a recognized glyph's unit, if any
    pub fn strokes_of(&self, glyph: char) -> Option<u32> {
        self.normalize(glyph).map(|unit| unit.strokes)
    }

    /// All identity units: radicals first, then components
    pub fn units(&self) -> &[IdentityUnit] {
        &self.units
    }

    /// The radical units, in table (number) order
    pub fn radicals(&self) -> impl Iterator<Item = &IdentityUnit> {
        self.units
            .iter()
            .filter(|unit| unit.kind == UnitKind::Radical)
    }

    /// The common component units, in table order
    pub fn components(&self) -> impl Iterator<Item = &IdentityUnit> {
        self.units
            .iter()
            .filter(|unit| unit.kind == UnitKind::Component)
    }

    /// The (semantic, visual) alias pairs, in table order
    pub fn visual_aliases(&self) -> &[(char, char)] {
        self.aliases
    }

    /// Every recognized glyph form and the unit it resolves to
    pub fn recognized_glyphs(&self) -> impl Iterator<Item = (char, &IdentityUnit)> {
        self.by_glyph
            .iter()
            .map(move |(&glyph, &idx)| (glyph, &self.units[idx]))
    }
}
