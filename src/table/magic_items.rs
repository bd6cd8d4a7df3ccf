//! Magic item tables A to I, each later table holds rarer items.

use rand::Rng;

use super::{entry, WeightedRange};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MagicItemTable {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

impl MagicItemTable {
    pub const ALL: [MagicItemTable; 9] = [
        MagicItemTable::A,
        MagicItemTable::B,
        MagicItemTable::C,
        MagicItemTable::D,
        MagicItemTable::E,
        MagicItemTable::F,
        MagicItemTable::G,
        MagicItemTable::H,
        MagicItemTable::I,
    ];

    pub fn table(self) -> &'static WeightedRange<&'static str> {
        match self {
            MagicItemTable::A => &TABLE_A,
            MagicItemTable::B => &TABLE_B,
            MagicItemTable::C => &TABLE_C,
            MagicItemTable::D => &TABLE_D,
            MagicItemTable::E => &TABLE_E,
            MagicItemTable::F => &TABLE_F,
            MagicItemTable::G => &TABLE_G,
            MagicItemTable::H => &TABLE_H,
            MagicItemTable::I => &TABLE_I,
        }
    }

    /// Draws a single item from the table.
    pub fn draw(self, rng: &mut impl Rng) -> Result<&'static str> {
        self.table().resolve(rng).copied()
    }
}

impl std::fmt::Display for MagicItemTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table().name())
    }
}

/// Draws `count` independent items from `table` and joins them with `, `.
/// Drawing zero items gives an empty string.
pub fn repeat_draws(count: u32, table: MagicItemTable, rng: &mut impl Rng) -> Result<String> {
    let items = (0..count)
        .map(|_| table.draw(rng))
        .collect::<Result<Vec<_>>>()?;

    Ok(items.join(", "))
}

static TABLE_A: WeightedRange<&str> = WeightedRange {
    name: "magic item table A",
    entries: &[
        entry(1, 50, "a potion of healing"),
        entry(51, 60, "a 0th level (cantrip) spell scroll"),
        entry(61, 70, "a potion of climbing"),
        entry(71, 90, "a 1st level spell scroll"),
        entry(91, 94, "a 2nd level spell scroll"),
        entry(95, 98, "a potion of greater healing"),
        entry(99, 99, "a bag of holding"),
        entry(100, 100, "a driftglobe"),
    ],
};

static TABLE_B: WeightedRange<&str> = WeightedRange {
    name: "magic item table B",
    entries: &[
        entry(1, 15, "a potion of greater healing"),
        entry(16, 22, "a potion of fire breath"),
        entry(23, 29, "a potion of resistance"),
        entry(30, 34, "an ammunition with +1"),
        entry(35, 39, "a potion of animal friendship"),
        entry(40, 44, "a potion of hill giant strength"),
        entry(45, 49, "a potion of growth"),
        entry(50, 54, "a potion of water breathing"),
        entry(55, 59, "a 2nd level spell scroll"),
        entry(60, 64, "a 3rd level spell scroll"),
        entry(65, 67, "a bag of holding"),
        entry(68, 70, "a keoghtom's ointment"),
        entry(71, 73, "an oil of slipperiness"),
        entry(74, 75, "a dust of disappearance"),
        entry(76, 77, "a dust of dryness"),
        entry(78, 79, "a dust of sneezing and choking"),
        entry(80, 81, "an elemental gem"),
        entry(82, 83, "a philter of love"),
        entry(84, 84, "an alchemy jug"),
        entry(85, 85, "a cap of water breathing"),
        entry(86, 86, "a cloak of the manta ray"),
        entry(87, 87, "a driftglobe"),
        entry(88, 88, "goggles of night"),
        entry(89, 89, "a helm of comprehending languages"),
        entry(90, 90, "an immovable rod"),
        entry(91, 91, "a lantern of revealing"),
        entry(92, 92, "a mariner's armor"),
        entry(93, 93, "mithral armor"),
        entry(94, 94, "a potion of poison"),
        entry(95, 95, "a ring of swimming"),
        entry(96, 96, "a robe of useful items"),
        entry(97, 97, "a rope of climbing"),
        entry(98, 98, "a saddle of the cavalier"),
        entry(99, 99, "a wand of magic detection"),
        entry(100, 100, "a wand of secrets"),
    ],
};

static TABLE_C: WeightedRange<&str> = WeightedRange {
    name: "magic item table C",
    entries: &[
        entry(1, 15, "a potion of superior healing"),
        entry(16, 22, "a 4th level spell scroll"),
        entry(23, 27, "an ammunition with +2"),
        entry(28, 32, "a potion of clairvoyance"),
        entry(33, 37, "a potion of diminution"),
        entry(38, 42, "a potion of gaseous form"),
        entry(43, 47, "a potion of frost giant strength"),
        entry(48, 52, "a potion of stone giant strength"),
        entry(53, 57, "a potion of heroism"),
        entry(58, 62, "a potion of invulnerability"),
        entry(63, 67, "a potion of mind reading"),
        entry(68, 72, "a 5th level spell scroll"),
        entry(73, 75, "an elixir of health"),
        entry(76, 78, "an oil of etherealness"),
        entry(79, 81, "a potion of fire giant strength"),
        entry(82, 84, "a quaal's feather token"),
        entry(85, 87, "a scroll of protection"),
        entry(88, 89, "a bag of beans"),
        entry(90, 91, "a bead of force"),
        entry(92, 92, "a chime of opening"),
        entry(93, 93, "a decanter of endless water"),
        entry(94, 94, "eyes of minute seeing"),
        entry(95, 95, "a folding boat"),
        entry(96, 96, "a heward's handy haversack"),
        entry(97, 97, "horseshoes of speed"),
        entry(98, 98, "a necklace of fireballs"),
        entry(99, 99, "a periapt of health"),
        entry(100, 100, "sending stones"),
    ],
};

static TABLE_D: WeightedRange<&str> = WeightedRange {
    name: "magic item table D",
    entries: &[
        entry(1, 20, "a potion of supreme healing"),
        entry(21, 30, "a potion of invisibility"),
        entry(31, 40, "a potion of speed"),
        entry(41, 50, "a 6th level spell scroll"),
        entry(51, 57, "a 7th level spell scroll"),
        entry(58, 62, "an ammunition with +3"),
        entry(63, 67, "an oil of sharpness"),
        entry(68, 72, "a potion of flying"),
        entry(73, 77, "a potion of cloud giant strength"),
        entry(78, 82, "a potion of longevity"),
        entry(83, 87, "a potion of vitality"),
        entry(88, 92, "an 8th level spell scroll"),
        entry(93, 95, "horseshoes of a zephyr"),
        entry(96, 98, "nolzur's marvelous pigments"),
        entry(99, 99, "a bag of devouring"),
        entry(100, 100, "a portable hole"),
    ],
};

static TABLE_E: WeightedRange<&str> = WeightedRange {
    name: "magic item table E",
    entries: &[
        entry(1, 30, "an 8th level spell scroll"),
        entry(31, 55, "a potion of storm giant strength"),
        entry(56, 70, "a potion of supreme healing"),
        entry(71, 85, "a 9th level spell scroll"),
        entry(86, 93, "a universal solvent"),
        entry(94, 98, "an arrow of slaying"),
        entry(99, 100, "a sovereign glue"),
    ],
};

static TABLE_F: WeightedRange<&str> = WeightedRange {
    name: "magic item table F",
    entries: &[
        entry(1, 15, "a weapon with +1"),
        entry(16, 18, "a shield with +1"),
        entry(19, 21, "a sentinel shield"),
        entry(22, 23, "an amulet of proof against detection and location"),
        entry(24, 25, "boots of elvenkind"),
        entry(26, 27, "boots of striding and springing"),
        entry(28, 29, "bracers of archery"),
        entry(30, 31, "a brooch of shielding"),
        entry(32, 33, "a broom of flying"),
        entry(34, 35, "a cloak of elvenkind"),
        entry(36, 37, "a cloak of protection"),
        entry(38, 39, "gauntlets of ogre power"),
        entry(40, 41, "a hat of disguise"),
        entry(42, 43, "a javelin of lightning"),
        entry(44, 45, "a pearl of power"),
        entry(46, 47, "a rod of the pact keeper with +1"),
        entry(48, 49, "slippers of spider climbing"),
        entry(50, 51, "a staff of the adder"),
        entry(52, 53, "a staff of the python"),
        entry(54, 55, "a sword of vengeance"),
        entry(56, 57, "a trident of fish command"),
        entry(58, 59, "a wand of magic missiles"),
        entry(60, 61, "a wand of the war mage with +1"),
        entry(62, 63, "a wand of web"),
        entry(64, 65, "a weapon of warning"),
        entry(66, 66, "adamantine chain mail"),
        entry(67, 67, "adamantine chain shirt"),
        entry(68, 68, "adamantine scale mail"),
        entry(69, 69, "a bag of tricks - gray"),
        entry(70, 70, "a bag of tricks - rust"),
        entry(71, 71, "a bag of tricks - tan"),
        entry(72, 72, "boots of the winterlands"),
        entry(73, 73, "a circlet of blasting"),
        entry(74, 74, "a deck of illusions"),
        entry(75, 75, "an eversmoking bottle"),
        entry(76, 76, "eyes of charming"),
        entry(77, 77, "eyes of the eagle"),
        entry(78, 78, "a figurine of wondrous power - silver raven"),
        entry(79, 79, "a gem of brightness"),
        entry(80, 80, "gloves of missile snaring"),
        entry(81, 81, "gloves of swimming and climbing"),
        entry(82, 82, "gloves of thievery"),
        entry(83, 83, "a headband of intellect"),
        entry(84, 84, "a helm of telepathy"),
        entry(85, 85, "an instrument of the bards - doss lute"),
        entry(86, 86, "an instrument of the bards - fochlucan bandore"),
        entry(87, 87, "an instrument of the bards - mac-fuimidh cittern"),
        entry(88, 88, "a medallion of thoughts"),
        entry(89, 89, "a necklace of adaptation"),
        entry(90, 90, "a periapt of wound closure"),
        entry(91, 91, "pipes of haunting"),
        entry(92, 92, "pipes of the sewers"),
        entry(93, 93, "a ring of jumping"),
        entry(94, 94, "a ring of mind shielding"),
        entry(95, 95, "a ring of warmth"),
        entry(96, 96, "a ring of water walking"),
        entry(97, 97, "a quiver of ehlonna"),
        entry(98, 98, "a stone of good luck"),
        entry(99, 99, "a wind fan"),
        entry(100, 100, "winged boots"),
    ],
};

static TABLE_G: WeightedRange<&str> = WeightedRange {
    name: "magic item table G",
    entries: &[
        entry(1, 11, "a weapon with +2"),
        entry(12, 14, "a figurine of wondrous power"),
        entry(15, 15, "an adamantine breastplate"),
        entry(16, 16, "an adamantine splint"),
        entry(17, 17, "an amulet of health"),
        entry(18, 18, "an armor of vulnerability"),
        entry(19, 19, "an arrow-catching shield"),
        entry(20, 20, "a belt of dwarvenkind"),
        entry(21, 21, "a belt of hill giant strength"),
        entry(22, 22, "a berserker axe"),
        entry(23, 23, "boots of levitation"),
        entry(24, 24, "boots of speed"),
        entry(25, 25, "a bowl of commanding water elementals"),
        entry(26, 26, "bracers of defense"),
        entry(27, 27, "a brazier of commanding fire elementals"),
        entry(28, 28, "a cape of the mountebank"),
        entry(29, 29, "a censer of controlling air elementals"),
        entry(30, 30, "a chain mail armor with +1"),
        entry(31, 31, "a chain mail armor of resistance"),
        entry(32, 32, "a chain shirt armor of resistance"),
        entry(33, 33, "a chain shirt with +1"),
        entry(34, 34, "a cloak of displacement"),
        entry(35, 35, "a cloak of the bat"),
        entry(36, 36, "a cube of force"),
        entry(37, 37, "Daern's instant fortress"),
        entry(38, 38, "a dagger of venom"),
        entry(39, 39, "dimensional shackles"),
        entry(40, 40, "a dragon slayer"),
        entry(41, 41, "an elven chain"),
        entry(42, 42, "a flame tongue"),
        entry(43, 43, "a gem of seeing"),
        entry(44, 44, "a giant slayer"),
        entry(45, 45, "glamoured studded leather"),
        entry(46, 46, "a helm of teleportation"),
        entry(47, 47, "a horn of blasting"),
        entry(48, 48, "a horn of valhalla - silver or brass"),
        entry(49, 49, "an instrument of the bards - canaith mandolin"),
        entry(50, 50, "an instrument of the bards - cli lyre"),
        entry(51, 51, "an ioun stone - awareness"),
        entry(52, 52, "an ioun stone - protection"),
        entry(53, 53, "an ioun stone - reserve"),
        entry(54, 54, "an ioun stone - sustenance"),
        entry(55, 55, "iron bands of Bilarro"),
        entry(56, 56, "a leather armor with +1"),
        entry(57, 57, "a leather armor of resistance"),
        entry(58, 58, "a mace of disruption"),
        entry(59, 59, "a mace of smiting"),
        entry(60, 60, "a mace of terror"),
        entry(61, 61, "a mantle of spell resistance"),
        entry(62, 62, "a necklace of prayer beads"),
        entry(63, 63, "a periapt of proof against poison"),
        entry(64, 64, "a ring of animal influence"),
        entry(65, 65, "a ring of evasion"),
        entry(66, 66, "a ring of feather falling"),
        entry(67, 67, "a ring of free action"),
        entry(68, 68, "a ring of protection"),
        entry(69, 69, "a ring of resistance"),
        entry(70, 70, "a ring of spell storing"),
        entry(71, 71, "a ring of the ram"),
        entry(72, 72, "a ring of X-ray vision"),
        entry(73, 73, "a robe of eyes"),
        entry(74, 74, "a rod of rulership"),
        entry(75, 75, "a rod of the pact keeper with +2"),
        entry(76, 76, "a rope of entanglement"),
        entry(77, 77, "a scale mail armor with +1"),
        entry(78, 78, "a scale mail armor of resistance"),
        entry(79, 79, "a shield with +2"),
        entry(80, 80, "a shield of missile attraction"),
        entry(81, 81, "a staff of charming"),
        entry(82, 82, "a staff of healing"),
        entry(83, 83, "a staff of swarming insects"),
        entry(84, 84, "a staff of the woodlands"),
        entry(85, 85, "a staff of withering"),
        entry(86, 86, "a stone of controlling earth elementals"),
        entry(87, 87, "a sun blade"),
        entry(88, 88, "a sword of life stealing"),
        entry(89, 89, "a sword of wounding"),
        entry(90, 90, "a tentacle rod"),
        entry(91, 91, "a vicious weapon"),
        entry(92, 92, "a wand of binding"),
        entry(93, 93, "a wand of enemy detection"),
        entry(94, 94, "a wand of fear"),
        entry(95, 95, "a wand of fireballs"),
        entry(96, 96, "a wand of lightning bolts"),
        entry(97, 97, "a wand of paralysis"),
        entry(98, 98, "a wand of the war mage with +2"),
        entry(99, 99, "a wand of wonder"),
        entry(100, 100, "wings of flying"),
    ],
};

static TABLE_H: WeightedRange<&str> = WeightedRange {
    name: "magic item table H",
    entries: &[
        entry(1, 10, "a weapon with +3"),
        entry(11, 12, "an amulet of the planes"),
        entry(13, 14, "a carpet of flying"),
        entry(15, 16, "a crystal ball - very rare version"),
        entry(17, 18, "a ring of regeneration"),
        entry(19, 20, "a ring of shooting stars"),
        entry(21, 22, "a ring of telekinesis"),
        entry(23, 24, "a robe of scintillating colors"),
        entry(25, 26, "a robe of stars"),
        entry(27, 28, "a rod of absorption"),
        entry(29, 30, "a rod of alertness"),
        entry(31, 32, "a rod of security"),
        entry(33, 34, "a rod of the pact keeper with +3"),
        entry(35, 36, "a scimitar of speed"),
        entry(37, 38, "a shield with +3"),
        entry(39, 40, "a staff of fire"),
        entry(41, 42, "a staff of frost"),
        entry(43, 44, "a staff of power"),
        entry(45, 46, "a staff of striking"),
        entry(47, 48, "a staff of thunder and lightning"),
        entry(49, 50, "a sword of sharpness"),
        entry(51, 52, "a wand of polymorph"),
        entry(53, 54, "a wand of the war mage with +3"),
        entry(55, 55, "adamantine half plate armor"),
        entry(56, 56, "adamantine plate armor"),
        entry(57, 57, "an animated shield"),
        entry(58, 58, "a belt of fire giant strength"),
        entry(59, 59, "a belt of frost (or stone) giant strength"),
        entry(60, 60, "breastplate armor with +1"),
        entry(61, 61, "breastplate armor of resistance"),
        entry(62, 62, "a candle of invocation"),
        entry(63, 63, "chain mail armor with +2"),
        entry(64, 64, "chain shirt armor with +2"),
        entry(65, 65, "a cloak of arachnida"),
        entry(66, 66, "a dancing sword"),
        entry(67, 67, "demon armor"),
        entry(68, 68, "dragon scale mail"),
        entry(69, 69, "dwarven plate"),
        entry(70, 70, "a dwarven thrower"),
        entry(71, 71, "an efreeti bottle"),
        entry(72, 72, "a figurine of wondrous power - obsidian steed"),
        entry(73, 73, "a frost brand"),
        entry(74, 74, "a helm of brilliance"),
        entry(75, 75, "a horn of valhalla - bronze"),
        entry(76, 76, "an instrument of the bards - anstruth harp"),
        entry(77, 77, "an ioun stone - absorption"),
        entry(78, 78, "an ioun stone - agility"),
        entry(79, 79, "an ioun stone - fortitude"),
        entry(80, 80, "an ioun stone - insight"),
        entry(81, 81, "an ioun stone - intellect"),
        entry(82, 82, "an ioun stone - leadership"),
        entry(83, 83, "an ioun stone - strength"),
        entry(84, 84, "leather armor with +2"),
        entry(85, 85, "a manual of bodily health"),
        entry(86, 86, "a manual of gainful exercise"),
        entry(87, 87, "a manual of golems"),
        entry(88, 88, "a manual of quickness of action"),
        entry(89, 89, "a mirror of life trapping"),
        entry(90, 90, "a nine lives stealer"),
        entry(91, 91, "an oathbow"),
        entry(92, 92, "scale mail armor with +2"),
        entry(93, 93, "a spellguard shield"),
        entry(94, 94, "splint armor with +1"),
        entry(95, 95, "a splint armor of resistance"),
        entry(96, 96, "studded leather armor with +1"),
        entry(97, 97, "a studded leather armor of resistance"),
        entry(98, 98, "a tome of clear thought"),
        entry(99, 99, "a tome of leadership and influence"),
        entry(100, 100, "a tome of understanding"),
    ],
};

static TABLE_I: WeightedRange<&str> = WeightedRange {
    name: "magic item table I",
    entries: &[
        entry(1, 5, "a defender"),
        entry(6, 10, "a hammer of thunderbolts"),
        entry(11, 15, "a luck blade"),
        entry(16, 20, "a sword of answering"),
        entry(21, 23, "a holy avenger"),
        entry(24, 26, "a ring of djinni summoning"),
        entry(27, 29, "a ring of invisibility"),
        entry(30, 32, "a ring of spell turning"),
        entry(33, 38, "a rod of lordly might"),
        entry(39, 41, "a vorpal sword"),
        entry(42, 43, "a belt of cloud giant strength"),
        entry(44, 45, "+2 breastplate armor"),
        entry(46, 47, "+3 chain mail armor"),
        entry(48, 49, "+3 chain shirt armor"),
        entry(50, 51, "a cloak of invisibility"),
        entry(52, 53, "a crystal ball - legendary version"),
        entry(54, 55, "+1 half plate armor"),
        entry(56, 57, "an iron flask"),
        entry(58, 59, "+3 leather armor"),
        entry(60, 61, "+1 plate armor"),
        entry(62, 63, "a robe of the archmagi"),
        entry(64, 65, "a rod of resurrection"),
        entry(66, 67, "+1 scale mail armor"),
        entry(68, 69, "a scarab of protection"),
        entry(70, 71, "+2 splint armor"),
        entry(72, 73, "+2 studded leather armor"),
        entry(74, 75, "a well of many worlds"),
        entry(76, 76, "+3 plate armor"),
        entry(77, 77, "apparatus of Kwalish"),
        entry(78, 78, "armor of invulnerability"),
        entry(79, 79, "a belt of storm giant strength"),
        entry(80, 80, "a cubic gate"),
        entry(81, 81, "a deck of many things"),
        entry(82, 82, "an efreeti chain"),
        entry(83, 83, "half plate armor of resistance"),
        entry(84, 84, "an iron horn of valhalla"),
        entry(85, 85, "an instrument of the bards - ollamh harp"),
        entry(86, 86, "an ioun stone - greater absorption"),
        entry(87, 87, "an ioun stone - mastery"),
        entry(88, 88, "an ioun stone - regeneration"),
        entry(89, 89, "plate armor of etherealness"),
        entry(90, 90, "plate armor of resistance"),
        entry(91, 91, "a ring of air elemental command"),
        entry(92, 92, "a ring of earth elemental command"),
        entry(93, 93, "a ring of fire elemental command"),
        entry(94, 94, "a ring of three wishes"),
        entry(95, 95, "a ring of water elemental command"),
        entry(96, 96, "a sphere of annihilation"),
        entry(97, 97, "a talisman of pure good"),
        entry(98, 98, "a talisman of the sphere"),
        entry(99, 99, "a talisman of ultimate evil"),
        entry(100, 100, "a tome of the stilled tongue"),
    ],
};
