//! Built-in reference catalog.

use super::types::PotType;

/// 草: (name, buy, sell).
pub(super) const GRASS: &[(&str, u32, u32)] = &[
    ("雑草", 10, 4),
    ("薬草", 40, 10),
    ("暴走の種", 50, 20),
    ("毒草", 50, 20),
    ("目つぶし草", 70, 25),
    ("パワーアップ草", 70, 25),
    ("めぐすり草", 70, 25),
    ("混乱草", 70, 25),
    ("すばやさ草", 70, 25),
    ("睡眠草", 70, 25),
    ("弟切草", 80, 30),
    ("くねくね草", 100, 40),
    ("高飛び草", 100, 40),
    ("いやし草", 200, 80),
    ("胃拡張の種", 200, 80),
    ("胃縮小の種", 200, 80),
    ("かぐわし草", 200, 80),
    ("ドラゴン草", 250, 100),
    ("無敵草", 400, 160),
    ("復活の草", 400, 160),
    ("不幸の種", 400, 160),
    ("命の草", 500, 200),
    ("毒消し草", 600, 240),
    ("ちからの草", 700, 280),
    ("しあわせ草", 1000, 400),
    ("超不幸の種", 2000, 800),
    ("天使の種", 2000, 800),
];

/// 巻物: (name, buy, sell, read onto another item).
pub(super) const SCROLLS: &[(&str, u32, u32, bool)] = &[
    ("ぬれた巻物", 200, 80, false),
    ("識別の巻物", 300, 120, true),
    ("銀封印の巻物", 300, 120, true),
    ("生物集合の巻物", 300, 120, false),
    ("混乱の巻物", 300, 120, false),
    ("バクスイの巻物", 300, 120, false),
    ("道具寄せの巻物", 300, 120, false),
    ("ゾワゾワの巻物", 300, 120, false),
    ("困った時の巻物", 300, 120, false),
    ("真空斬りの巻物", 300, 120, false),
    ("印増大の巻物", 400, 160, true),
    ("印消しの巻物", 400, 160, true),
    ("メッキの巻物", 400, 160, true),
    ("地の恵みの巻物", 400, 160, true),
    ("天の恵みの巻物", 400, 160, true),
    ("おにぎりの巻物", 400, 160, true),
    ("罠消しの巻物", 600, 240, false),
    ("あかりの巻物", 600, 240, false),
    ("迷子の巻物", 600, 240, false),
    ("おはらいの巻物", 600, 240, true),
    ("敵加速の巻物", 1000, 400, false),
    ("拾えずの巻物", 1000, 400, false),
    ("くちなしの巻物", 1000, 400, false),
    ("バクチの巻物", 1000, 400, false),
    ("大部屋の巻物", 1000, 400, false),
    ("水がれの巻物", 1000, 400, false),
    ("魔物部屋の巻物", 1000, 400, false),
    ("罠の巻物", 1000, 400, false),
    ("呪いの巻物", 1000, 400, true),
    ("吸い出しの巻物", 1000, 400, true),
    ("壺増大の巻物", 1000, 400, true),
    ("銀はがしの巻物", 1000, 400, true),
    ("脱出の巻物", 1000, 400, false),
    ("聖域の巻物", 1000, 400, false),
    ("白紙の巻物", 1000, 400, false),
    ("全滅の巻物", 3000, 1200, false),
    ("ねだやしの巻物", 10000, 4000, false),
];

/// 杖: (name, buy, sell).
pub(super) const STAVES: &[(&str, u32, u32)] = &[
    ("感電の杖[4]", 900, 360),
    ("封印の杖[4]", 900, 360),
    ("かなしばりの杖[4]", 900, 360),
    ("導きの杖[2]", 900, 360),
    ("場所がえの杖[5]", 1000, 400),
    ("かなしばりの杖[5]", 1000, 400),
    ("吹き飛ばしの杖[5]", 1000, 400),
    ("導きの杖[3]", 1000, 400),
    ("封印の杖[5]", 1000, 400),
    ("飛びつきの杖[5]", 1000, 400),
    ("ただの杖[5]", 1000, 400),
    ("感電の杖[5]", 1000, 400),
    ("転ばぬ先の杖[5]", 1000, 400),
    ("導きの杖[4]", 1100, 440),
    ("ただの杖[6]", 1100, 440),
    ("かなしばりの杖[6]", 1100, 440),
    ("鈍足の杖[4]", 1100, 440),
    ("封印の杖[6]", 1100, 440),
    ("感電の杖[6]", 1100, 440),
    ("加速の杖[4]", 1100, 440),
    ("吹き飛ばしの杖[6]", 1100, 440),
    ("場所がえの杖[6]", 1100, 440),
    ("飛びつきの杖[6]", 1100, 440),
    ("トンネルの杖[4]", 1100, 440),
    ("転ばぬ先の杖[6]", 1100, 440),
    ("土塊の杖[4]", 1100, 440),
    ("土塊の杖[5]", 1200, 480),
    ("転ばぬ先の杖[7]", 1200, 480),
    ("トンネルの杖[5]", 1200, 480),
    ("飛びつきの杖[7]", 1200, 480),
    ("吹き飛ばしの杖[7]", 1200, 480),
    ("鈍足の杖[5]", 1200, 480),
    ("ただの杖[7]", 1200, 480),
    ("場所がえの杖[7]", 1200, 480),
    ("加速の杖[5]", 1200, 480),
    ("鈍足の杖[6]", 1300, 520),
    ("トンネルの杖[6]", 1300, 520),
    ("加速の杖[6]", 1300, 520),
    ("土塊の杖[6]", 1300, 520),
    ("不幸の杖[4]", 1400, 560),
    ("幸せの杖[4]", 1400, 560),
    ("一時しのぎの杖[4]", 1400, 560),
    ("一時しのぎの杖[5]", 1500, 600),
    ("痛み分けの杖[5]", 1500, 600),
    ("不幸の杖[5]", 1500, 600),
    ("幸せの杖[5]", 1500, 600),
    ("ガイコツまどうの杖[5]", 1500, 600),
    ("痛み分けの杖[6]", 1600, 640),
    ("幸せの杖[6]", 1600, 640),
    ("不幸の杖[6]", 1600, 640),
    ("一時しのぎの杖[6]", 1600, 640),
    ("ガイコツまどうの杖[6]", 1600, 640),
    ("ガイコツまどうの杖[7]", 1700, 680),
    ("痛み分けの杖[7]", 1700, 680),
    ("桃まんの杖[4]", 2400, 960),
    ("身代わりの杖[4]", 2400, 960),
    ("桃まんの杖[5]", 2500, 1000),
    ("身代わりの杖[5]", 2500, 1000),
    ("身代わりの杖[6]", 2600, 1040),
    ("桃まんの杖[6]", 2600, 1040),
];

/// 腕輪: (name, buy, sell).
pub(super) const BRACELETS: &[(&str, u32, u32)] = &[
    ("痛恨の腕輪", 1500, 600),
    ("ボヨヨンの腕輪", 1500, 600),
    ("罠増しの腕輪", 1500, 600),
    ("垂れ流しの腕輪", 1500, 600),
    ("連射の腕輪", 1500, 600),
    ("諸刃の腕輪", 1500, 600),
    ("ヘタ投げの腕輪", 1500, 600),
    ("遠投の腕輪", 1500, 600),
    ("爆発の腕輪", 1500, 600),
    ("高飛びの腕輪", 1500, 600),
    ("金垂れ流しの腕輪", 1500, 600),
    ("ちからの腕輪", 2000, 800),
    ("睡眠よけの腕輪", 2500, 1000),
    ("大砲強化の腕輪", 2500, 1000),
    ("道具感知の腕輪", 2500, 1000),
    ("気配察知の腕輪", 2500, 1000),
    ("呪いよけの腕輪", 3000, 1200),
    ("魔物呼びの腕輪", 3000, 1200),
    ("浮遊の腕輪", 3000, 1200),
    ("水グモの腕輪", 3000, 1200),
    ("胃縮小の腕輪", 3500, 1400),
    ("胃拡張の腕輪", 3500, 1400),
    ("値切りの腕輪", 3500, 1400),
    ("弾きよけの腕輪", 3500, 1400),
    ("しあわせの腕輪", 4000, 1600),
    ("混乱よけの腕輪", 4000, 1600),
    ("裏道の腕輪", 5000, 2000),
    ("回復の腕輪", 5000, 2000),
    ("錆よけの腕輪", 5000, 2000),
    ("透視の腕輪", 5000, 2000),
    ("すれちがいの腕輪", 5000, 2000),
    ("壁抜けの腕輪", 6500, 2600),
    ("忍び足の腕輪", 6500, 2600),
    ("毒消しの腕輪", 6500, 2600),
    ("鑑定師の腕輪", 7500, 3000),
    ("罠師の腕輪", 7500, 3000),
    ("百発百中の腕輪", 15000, 6000),
];

/// お香: (name, buy, sell).
pub(super) const INCENSES: &[(&str, u32, u32)] = &[
    ("無欲のお香[2]", 2200, 880),
    ("耐炎耐爆のお香[2]", 2200, 880),
    ("目配りのお香[2]", 2200, 880),
    ("攻めのお香[2]", 2200, 880),
    ("守りのお香[2]", 2200, 880),
    ("山彦のお香[2]", 2200, 880),
    ("身かわしのお香[2]", 2200, 880),
    ("視界不良のお香[2]", 2200, 880),
    ("重力のお香[2]", 2200, 880),
    ("身かわしのお香[3]", 2300, 920),
    ("目配りのお香[3]", 2300, 920),
    ("重力のお香[3]", 2300, 920),
    ("守りのお香[3]", 2300, 920),
    ("山彦のお香[3]", 2300, 920),
    ("耐炎耐爆のお香[3]", 2300, 920),
    ("攻めのお香[3]", 2300, 920),
    ("視界不良のお香[3]", 2300, 920),
    ("無欲のお香[3]", 2300, 920),
    ("視界不良のお香[4]", 2400, 960),
    ("耐炎耐爆のお香[4]", 2400, 960),
    ("目配りのお香[4]", 2400, 960),
    ("守りのお香[4]", 2400, 960),
    ("攻めのお香[4]", 2400, 960),
    ("身かわしのお香[4]", 2400, 960),
    ("山彦のお香[4]", 2400, 960),
    ("重力のお香[4]", 2400, 960),
    ("無欲のお香[4]", 2400, 960),
];

/// 壺: (name, buy, sell, pot type).
pub(super) const POTS: &[(&str, u32, u32, PotType)] = &[
    ("やりすごしの壺[3]", 1100, 440, PotType::Empty),
    ("識別の壺[3]", 1100, 440, PotType::Empty),
    ("ただの壺[3]", 1100, 440, PotType::Empty),
    ("変化の壺[3]", 1100, 440, PotType::Empty),
    ("保存の壺[3]", 1100, 440, PotType::Empty),
    ("底抜けの壺[2]", 1200, 480, PotType::Empty),
    ("倉庫の壺[2]", 1200, 480, PotType::Empty),
    ("ただの壺[4]", 1200, 480, PotType::Empty),
    ("やりすごしの壺[4]", 1200, 480, PotType::Empty),
    ("保存の壺[4]", 1200, 480, PotType::Empty),
    ("識別の壺[4]", 1200, 480, PotType::Empty),
    ("変化の壺[4]", 1200, 480, PotType::Empty),
    ("保存の壺[5]", 1300, 520, PotType::Empty),
    ("識別の壺[5]", 1300, 520, PotType::Empty),
    ("倉庫の壺[3]", 1300, 520, PotType::Empty),
    ("変化の壺[5]", 1300, 520, PotType::Empty),
    ("換金の壺[3]", 1300, 520, PotType::Empty),
    ("底抜けの壺[3]", 1300, 520, PotType::Empty),
    ("やりすごしの壺[5]", 1300, 520, PotType::Empty),
    ("ただの壺[5]", 1300, 520, PotType::Empty),
    ("割れない壺[3]", 1300, 520, PotType::Empty),
    ("手封じの壺[3]", 1300, 520, PotType::Empty),
    ("底抜けの壺[4]", 1400, 560, PotType::Empty),
    ("割れない壺[4]", 1400, 560, PotType::Empty),
    ("倉庫の壺[4]", 1400, 560, PotType::Empty),
    ("手封じの壺[4]", 1400, 560, PotType::Empty),
    ("換金の壺[4]", 1400, 560, PotType::Empty),
    ("割れない壺[5]", 1500, 600, PotType::Empty),
    ("換金の壺[5]", 1500, 600, PotType::Empty),
    ("手封じの壺[5]", 1500, 600, PotType::Empty),
    ("倉庫の壺[5]", 1500, 600, PotType::Empty),
    ("おはらいの壺[2]", 1800, 720, PotType::Empty),
    ("呪いの壺[2]", 1800, 720, PotType::Empty),
    ("おはらいの壺[3]", 1900, 760, PotType::Empty),
    ("呪いの壺[3]", 1900, 760, PotType::Empty),
    ("おはらいの壺[4]", 2000, 800, PotType::Empty),
    ("呪いの壺[4]", 2000, 800, PotType::Empty),
    ("笑いの壺[2]", 2200, 880, PotType::Back),
    ("笑いの壺[3]", 2300, 920, PotType::Back),
    ("魔物の壺[3]", 2300, 920, PotType::Back),
    ("水鉄砲の壺[3]", 2300, 920, PotType::Back),
    ("トドの壺[3]", 2300, 920, PotType::Back),
    ("ビックリの壺[3]", 2300, 920, PotType::Surprise),
    ("背中の壺[3]", 2300, 920, PotType::Back),
    ("ビックリの壺[4]", 2400, 960, PotType::Surprise),
    ("魔物の壺[4]", 2400, 960, PotType::Back),
    ("水鉄砲の壺[4]", 2400, 960, PotType::Back),
    ("トドの壺[4]", 2400, 960, PotType::Back),
    ("背中の壺[4]", 2400, 960, PotType::Back),
    ("背中の壺[5]", 2500, 1000, PotType::Back),
    ("トドの壺[5]", 2500, 1000, PotType::Back),
    ("水鉄砲の壺[5]", 2500, 1000, PotType::Back),
    ("魔物の壺[5]", 2500, 1000, PotType::Back),
    ("ビックリの壺[5]", 2500, 1000, PotType::Surprise),
    ("合成の壺[3]", 6300, 2520, PotType::Empty),
    ("合成の壺[4]", 6400, 2560, PotType::Empty),
    ("弱化の壺[2]", 10200, 4080, PotType::Empty),
    ("強化の壺[2]", 10200, 4080, PotType::Empty),
    ("強化の壺[3]", 10300, 4120, PotType::Empty),
    ("弱化の壺[3]", 10300, 4120, PotType::Empty),
];
