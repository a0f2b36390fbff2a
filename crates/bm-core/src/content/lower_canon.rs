//! The lower canon: hexagrams 31-64.

use super::brief;
use crate::hexagram::{Hexagram, LineText};
use crate::trigram::Trigram::{Earth, Fire, Heaven, Lake, Mountain, Thunder, Water, Wind};

/// Hexagrams 31-64 in King Wen order.
pub static LOWER_CANON: [Hexagram; 34] = [
    brief(
        31,
        "Influence",
        "咸",
        Lake,
        Mountain,
        "Influence. Success. Perseverance furthers. To take a maiden to wife brings good \
         fortune.",
        "A lake on the mountain. Thus the superior one encourages people to approach by \
         their readiness to receive them.",
        &["Mutual attraction is at work. Stay open and receptive and the right influence \
           will reach you."],
    ),
    brief(
        32,
        "Duration",
        "恆",
        Thunder,
        Wind,
        "Duration. Success. No blame. Perseverance furthers. It furthers one to have \
         somewhere to go.",
        "Thunder and wind. Thus the superior one stands firm and does not change their \
         direction.",
        &["What lasts is what renews itself. Stay consistent in purpose while adapting \
           your methods."],
    ),
    brief(
        33,
        "Retreat",
        "遯",
        Heaven,
        Mountain,
        "Retreat. Success. In what is small, perseverance furthers.",
        "Mountain under heaven. Thus the superior one keeps the inferior at a distance, \
         not angrily but with reserve.",
        &["Withdraw in good order while you still can. Strategic retreat is strength, not \
           defeat."],
    ),
    brief(
        34,
        "The Power of the Great",
        "大壯",
        Thunder,
        Heaven,
        "The power of the great. Perseverance furthers.",
        "Thunder in heaven above. Thus the superior one does not tread upon paths that do \
         not accord with established order.",
        &["You have considerable power now. Use it in accord with what is right, or it \
           will turn against you."],
    ),
    brief(
        35,
        "Progress",
        "晉",
        Fire,
        Earth,
        "Progress. The powerful prince is honoured with horses in large numbers. In a \
         single day he is granted audience three times.",
        "The sun rises over the earth. Thus the superior one brightens their own bright \
         virtue.",
        &["Rapid, easy progress is possible. Advance openly and share the credit with \
           those who help."],
    ),
    brief(
        36,
        "Darkening of the Light",
        "明夷",
        Earth,
        Fire,
        "Darkening of the light. In adversity it furthers one to be persevering.",
        "The light has sunk into the earth. Thus the superior one lives with the great \
         mass: they veil their light, yet still shine.",
        &["Conditions are hostile to your light. Keep your insight inwardly and appear \
           compliant outwardly until it passes."],
    ),
    brief(
        37,
        "The Family",
        "家人",
        Wind,
        Fire,
        "The family. The perseverance of the woman furthers.",
        "Wind comes forth from fire. Thus the superior one has substance in their words \
         and duration in their way of life.",
        &["Attend to your closest relationships and roles. Order at home makes order \
           elsewhere possible."],
    ),
    brief(
        38,
        "Opposition",
        "睽",
        Fire,
        Lake,
        "Opposition. In small matters, good fortune.",
        "Above, fire; below, the lake. Thus amid all fellowship the superior one retains \
         their individuality.",
        &["Differences are sharp. Aim only for small agreements now; large undertakings \
           need more common ground."],
    ),
    brief(
        39,
        "Obstruction",
        "蹇",
        Water,
        Mountain,
        "Obstruction. The southwest furthers; the northeast does not further. It furthers \
         one to see the great one.",
        "Water on the mountain. Thus the superior one turns their attention to themself \
         and moulds their character.",
        &["The way ahead is blocked. Pause, seek counsel, and look inward for the change \
           that opens the path."],
    ),
    brief(
        40,
        "Deliverance",
        "解",
        Thunder,
        Water,
        "Deliverance. The southwest furthers. If there is no longer anything where one \
         has to go, return brings good fortune.",
        "Thunder and rain set in. Thus the superior one pardons mistakes and forgives \
         misdeeds.",
        &["Tension is releasing. Clear away what remains of the trouble quickly, forgive, \
           and return to normal life."],
    ),
    brief(
        41,
        "Decrease",
        "損",
        Mountain,
        Lake,
        "Decrease combined with sincerity brings about supreme good fortune without \
         blame.",
        "At the foot of the mountain, the lake. Thus the superior one controls their \
         anger and restrains their instincts.",
        &["Simplify. Giving something up now, willingly, makes room for what truly \
           matters."],
    ),
    brief(
        42,
        "Increase",
        "益",
        Wind,
        Thunder,
        "Increase. It furthers one to undertake something. It furthers one to cross the \
         great water.",
        "Wind and thunder. Thus the superior one, seeing good, imitates it; having \
         faults, rids themself of them.",
        &["A time of gain and growth. Undertake worthwhile projects and let the benefits \
           flow to others too."],
    ),
    brief(
        43,
        "Breakthrough",
        "夬",
        Lake,
        Heaven,
        "Breakthrough. One must resolutely make the matter known at the court of the \
         king. It must be announced truthfully.",
        "The lake has risen up to heaven. Thus the superior one dispenses riches \
         downward and refrains from resting on their virtue.",
        &["Resolve the matter openly and firmly, but without violence. Truth stated \
           plainly carries the day."],
    ),
    brief(
        44,
        "Coming to Meet",
        "姤",
        Heaven,
        Wind,
        "Coming to meet. The maiden is powerful. One should not marry such a maiden.",
        "Under heaven, wind. Thus does the prince act when disseminating their commands \
         and proclaiming them to the four quarters.",
        &["An unexpected influence approaches. Be wary of what seems harmless but grows \
           quickly once admitted."],
    ),
    brief(
        45,
        "Gathering Together",
        "萃",
        Lake,
        Earth,
        "Gathering together. Success. The king approaches their temple. It furthers one \
         to see the great one.",
        "Over the earth, the lake. Thus the superior one renews their weapons in order to \
         meet the unforeseen.",
        &["People are coming together. Provide a shared purpose and prepare for the \
           friction that crowds bring."],
    ),
    brief(
        46,
        "Pushing Upward",
        "升",
        Earth,
        Wind,
        "Pushing upward has supreme success. One must see the great one. Fear not. \
         Departure toward the south brings good fortune.",
        "Within the earth, wood grows. Thus the superior one of devoted character heaps \
         up small things in order to achieve something high and great.",
        &["Steady effort raises you step by step. Keep growing like a tree, patiently and \
           without forcing."],
    ),
    brief(
        47,
        "Oppression",
        "困",
        Lake,
        Water,
        "Oppression. Success. Perseverance. The great one brings about good fortune. \
         When one has something to say, it is not believed.",
        "There is no water in the lake. Thus the superior one stakes their life on \
         following their will.",
        &["You are hemmed in and words carry little weight. Hold to your purpose; \
           adversity tests and strengthens resolve."],
    ),
    brief(
        48,
        "The Well",
        "井",
        Water,
        Wind,
        "The well. The town may be changed, but the well cannot be changed. It neither \
         decreases nor increases.",
        "Water over wood. Thus the superior one encourages the people at their work and \
         exhorts them to help one another.",
        &["Return to the deep, shared source. What truly nourishes does not change with \
           circumstances; keep it clear and accessible."],
    ),
    brief(
        49,
        "Revolution",
        "革",
        Lake,
        Fire,
        "Revolution. On your own day you are believed. Supreme success, furthering \
         through perseverance. Remorse disappears.",
        "Fire in the lake. Thus the superior one sets the calendar in order and makes the \
         seasons clear.",
        &["Fundamental change is warranted. Act only when the time is ripe and the need \
           is widely understood."],
    ),
    brief(
        50,
        "The Cauldron",
        "鼎",
        Fire,
        Wind,
        "The cauldron. Supreme good fortune. Success.",
        "Fire over wood. Thus the superior one consolidates their fate by making their \
         position correct.",
        &["Something is being transformed into nourishment. Cultivate what is valuable \
           and offer it where it can feed many."],
    ),
    brief(
        51,
        "The Arousing",
        "震",
        Thunder,
        Thunder,
        "Shock brings success. Shock comes: oh, oh! Laughing words: ha, ha! The shock \
         terrifies for a hundred miles, and one does not let fall the sacrificial spoon.",
        "Thunder repeated. Thus in fear and trembling the superior one sets their life in \
         order and examines themself.",
        &["A sudden shock arrives. Stay composed; once the fright passes, it leaves you \
           clearer and more alert."],
    ),
    brief(
        52,
        "Keeping Still",
        "艮",
        Mountain,
        Mountain,
        "Keeping still. Keeping their back still so that they no longer feel their body. \
         No blame.",
        "Mountains standing close together. Thus the superior one does not permit their \
         thoughts to go beyond their situation.",
        &["Be still. Quieting the mind and ceasing unnecessary action lets the right \
           course become obvious."],
    ),
    brief(
        53,
        "Development",
        "漸",
        Wind,
        Mountain,
        "Development. The maiden is given in marriage. Good fortune. Perseverance \
         furthers.",
        "On the mountain, a tree. Thus the superior one abides in dignity and virtue, in \
         order to improve the mores.",
        &["Progress comes gradually and properly. Follow each step in order; lasting \
           results cannot be rushed."],
    ),
    brief(
        54,
        "The Marrying Maiden",
        "歸妹",
        Thunder,
        Lake,
        "The marrying maiden. Undertakings bring misfortune. Nothing that would further.",
        "Thunder over the lake. Thus the superior one understands the transitory in the \
         light of the eternity of the end.",
        &["You hold a subordinate position in this matter. Act with tact and keep the \
           long-term outcome in mind."],
    ),
    brief(
        55,
        "Abundance",
        "豐",
        Thunder,
        Fire,
        "Abundance has success. The king attains abundance. Be not sad. Be like the sun \
         at midday.",
        "Both thunder and lightning come. Thus the superior one decides lawsuits and \
         carries out punishments.",
        &["You are at a peak. Enjoy it fully and act decisively, knowing that every \
           zenith gives way to decline."],
    ),
    brief(
        56,
        "The Wanderer",
        "旅",
        Fire,
        Mountain,
        "The wanderer. Success through smallness. Perseverance brings good fortune to the \
         wanderer.",
        "Fire on the mountain. Thus the superior one is clear-minded and cautious in \
         imposing penalties and protracts no lawsuits.",
        &["You are a stranger in this situation. Be courteous and reserved, and keep \
           moving toward your goal."],
    ),
    brief(
        57,
        "The Gentle",
        "巽",
        Wind,
        Wind,
        "The gentle. Success through what is small. It furthers one to have somewhere to \
         go. It furthers one to see the great one.",
        "Winds following one upon the other. Thus the superior one spreads their commands \
         abroad and carries out their undertakings.",
        &["Persistent, gentle influence penetrates where force fails. Keep a clear aim and \
           apply steady pressure."],
    ),
    brief(
        58,
        "The Joyous",
        "兌",
        Lake,
        Lake,
        "The joyous. Success. Perseverance is favourable.",
        "Lakes resting one on the other. Thus the superior one joins with friends for \
         discussion and practice.",
        &["Joy shared is joy multiplied. Exchange ideas freely, and let your cheer rest \
           on inner steadiness."],
    ),
    brief(
        59,
        "Dispersion",
        "渙",
        Wind,
        Water,
        "Dispersion. Success. The king approaches their temple. It furthers one to cross \
         the great water.",
        "The wind drives over the water. Thus the kings of old sacrificed to the Lord and \
         built temples.",
        &["Rigidity is dissolving. Let hardened positions soften and reunite people \
           around something larger than themselves."],
    ),
    brief(
        60,
        "Limitation",
        "節",
        Water,
        Lake,
        "Limitation. Success. Galling limitation must not be persevered in.",
        "Water over the lake. Thus the superior one creates number and measure and \
         examines the nature of virtue and correct conduct.",
        &["Set sensible limits. Boundaries give shape to effort, but limits that choke \
           cannot last."],
    ),
    brief(
        61,
        "Inner Truth",
        "中孚",
        Wind,
        Lake,
        "Inner truth. Pigs and fishes. Good fortune. It furthers one to cross the great \
         water.",
        "Wind over the lake. Thus the superior one discusses criminal cases in order to \
         delay executions.",
        &["Sincerity reaches even the hardest to reach. Understand others from within, \
           and they will respond in kind."],
    ),
    brief(
        62,
        "Preponderance of the Small",
        "小過",
        Thunder,
        Mountain,
        "Preponderance of the small. Success. Small things may be done; great things \
         should not be done.",
        "Thunder on the mountain. Thus in their conduct the superior one gives \
         preponderance to reverence.",
        &["This is a time for modest, careful steps. Attend to small matters well and do \
           not reach too high."],
    ),
    Hexagram {
        number: 63,
        name: "After Completion",
        chinese_name: Some("既濟"),
        upper: Water,
        lower: Fire,
        judgment: "After completion. Success in small matters. Perseverance furthers. At \
                   the beginning good fortune, at the end disorder.",
        image: "Water over fire: the image of the condition in time after completion. \
                Thus the superior one takes thought of misfortune and arms themself \
                against it in advance.",
        commentary: &[
            "Every line stands in its proper place: strong lines in strong places, weak \
             lines in weak places. The transition is finished and order has been reached.",
            "Yet perfect equilibrium is the most precarious state. Whoever relaxes once \
             the goal is reached invites the decline that always follows fulfilment.",
        ],
        changing_lines: &[
            LineText {
                position: 1,
                text: "They brake their wheels. They get their tail in the water. No \
                       blame. Restraint at the start keeps momentum from carrying you away.",
            },
            LineText {
                position: 2,
                text: "The woman loses the curtain of her carriage. Do not run after it; \
                       on the seventh day you will get it.",
            },
            LineText {
                position: 3,
                text: "The Illustrious Ancestor disciplines the Devil's Country. After \
                       three years they conquer it. Inferior people must not be employed.",
            },
            LineText {
                position: 4,
                text: "The finest clothes turn to rags. Be careful all day long.",
            },
            LineText {
                position: 5,
                text: "The neighbour in the east who slaughters an ox does not attain as \
                       much real happiness as the neighbour in the west with their small \
                       offering.",
            },
            LineText {
                position: 6,
                text: "They get their head in the water. Danger. Having crossed, do not \
                       look back and linger.",
            },
        ],
        interpretations: &[
            "The goal has been reached. Consolidate what you have achieved and watch for \
             the first signs of decline.",
            "Maintenance now matters more than new initiatives.",
            "Success invites complacency; stay attentive to details.",
            "Small adjustments keep the balance; large changes would upset it.",
            "Plan for the next cycle while this one is still going well.",
        ],
    },
    Hexagram {
        number: 64,
        name: "Before Completion",
        chinese_name: Some("未濟"),
        upper: Fire,
        lower: Water,
        judgment: "Before completion. Success. But if the little fox, after nearly \
                   completing the crossing, gets its tail in the water, there is nothing \
                   that would further.",
        image: "Fire over water: the image of the condition before transition. Thus the \
                superior one is careful in the differentiation of things, so that each \
                finds its place.",
        commentary: &[
            "No line stands in its proper place, yet every line has its partner. The task \
             is great and full of promise, but the transition has not yet been made.",
            "The book closes on this hexagram because every completion opens onto a new \
             beginning; the cycle never ends in stillness.",
            "Caution like an old fox crossing thin ice is needed: listen, step, and \
             listen again.",
        ],
        changing_lines: &[
            LineText {
                position: 1,
                text: "They get their tail in the water. Humiliating. Starting before \
                       conditions allow brings embarrassment.",
            },
            LineText {
                position: 2,
                text: "They brake their wheels. Perseverance brings good fortune. Wait \
                       while strength gathers.",
            },
            LineText {
                position: 3,
                text: "Before completion, attack brings misfortune. It furthers one to \
                       cross the great water, but only with helpers.",
            },
            LineText {
                position: 4,
                text: "Perseverance brings good fortune. Remorse disappears. Shock, thus \
                       to discipline the Devil's Country. For three years great realms are \
                       awarded.",
            },
            LineText {
                position: 5,
                text: "Perseverance brings good fortune. No remorse. The light of the \
                       superior one is true. Good fortune.",
            },
            LineText {
                position: 6,
                text: "There is drinking of wine in genuine confidence. No blame. But if \
                       one wets their head, they lose it in truth.",
            },
        ],
        interpretations: &[
            "Success is near but not yet secured. Proceed with the care of a fox crossing \
             ice.",
            "Put things in their proper places before making the final move.",
            "The transition from chaos to order is underway; your caution decides the \
             outcome.",
            "Enthusiasm must be tempered by prudence at this threshold.",
            "A new cycle is about to begin. Prepare thoroughly for it.",
        ],
    },
];
