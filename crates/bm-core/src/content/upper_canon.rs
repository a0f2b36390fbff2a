//! The upper canon: hexagrams 1-30.

use super::brief;
use crate::hexagram::{Hexagram, LineText};
use crate::trigram::Trigram::{Earth, Fire, Heaven, Lake, Mountain, Thunder, Water, Wind};

/// Hexagrams 1-30 in King Wen order.
pub static UPPER_CANON: [Hexagram; 30] = [
    Hexagram {
        number: 1,
        name: "The Creative",
        chinese_name: Some("乾"),
        upper: Heaven,
        lower: Heaven,
        judgment: "The Creative works sublime success, furthering through perseverance.",
        image: "The movement of heaven is full of power. Thus the superior one makes \
                themself strong and untiring.",
        commentary: &[
            "Six unbroken lines stand for primal power: light-giving, active, strong, \
             and of the spirit. Its energy is unrestricted by any fixed condition in space.",
            "Success comes to the one who aligns with the course of heaven, for heaven \
             moves without pause and every being receives its nature from that movement.",
            "The lines trace the dragon from the depths to the sky: power first hidden, \
             then seen, then tested, then soaring, and finally overreaching.",
        ],
        changing_lines: &[
            LineText {
                position: 1,
                text: "Hidden dragon. Do not act. The strength is real but its time has \
                       not come; gather it quietly.",
            },
            LineText {
                position: 2,
                text: "Dragon appearing in the field. It furthers one to see the great \
                       one. Your ability is becoming visible; seek those who can recognize it.",
            },
            LineText {
                position: 3,
                text: "All day long the superior one is creatively active. At nightfall \
                       the mind is still beset with cares. Danger, but no blame.",
            },
            LineText {
                position: 4,
                text: "Wavering flight over the depths. No blame. A free choice lies \
                       before you between rising and withdrawing; either can be right.",
            },
            LineText {
                position: 5,
                text: "Flying dragon in the heavens. It furthers one to see the great \
                       one. Influence is at its height; use it generously.",
            },
            LineText {
                position: 6,
                text: "Arrogant dragon will have cause to repent. Whoever climbs too \
                       high loses touch with those below.",
            },
        ],
        interpretations: &[
            "The creative force is at its strongest. Act with initiative and persistence, \
             and success will follow.",
            "A time for bold leadership: set the direction rather than waiting for \
             circumstances to settle.",
            "Your energy is abundant, but it needs a worthy aim. Clarify what you serve \
             before you spend it.",
            "Persistence in what is right brings success; persistence in mere ambition \
             brings the arrogant dragon's regret.",
            "Creative work begun now has unusual staying power. Start the project you \
             have been circling.",
            "Strength is best shown through steady, untiring effort rather than a single \
             dramatic gesture.",
        ],
    },
    Hexagram {
        number: 2,
        name: "The Receptive",
        chinese_name: Some("坤"),
        upper: Earth,
        lower: Earth,
        judgment: "The Receptive brings about sublime success, furthering through the \
                   perseverance of a mare. If the superior one tries to lead, they go \
                   astray; if they follow, they find guidance.",
        image: "The earth's condition is receptive devotion. Thus the superior one, with \
                breadth of character, carries the outer world.",
        commentary: &[
            "Six broken lines stand for the dark, yielding, receptive primal power. It \
             completes what the Creative begins, giving form to what heaven inspires.",
            "The mare roams the earth without limit yet stays gentle and devoted; this is \
             the image of strength that serves rather than commands.",
        ],
        changing_lines: &[
            LineText {
                position: 1,
                text: "When there is hoarfrost underfoot, solid ice is not far off. Small \
                       signs announce what is coming; heed them early.",
            },
            LineText {
                position: 2,
                text: "Straight, square, great. Without purpose, yet nothing remains \
                       unfurthered. Act from your nature and things fall into place.",
            },
            LineText {
                position: 3,
                text: "Hidden lines. One is able to remain persevering. If you serve a \
                       greater cause, seek not the credit but the completion.",
            },
            LineText {
                position: 4,
                text: "A tied-up sack. No blame, no praise. Reserve is called for; keep \
                       your counsel.",
            },
            LineText {
                position: 5,
                text: "A yellow lower garment brings supreme good fortune. Genuine \
                       worth shows through modesty.",
            },
            LineText {
                position: 6,
                text: "Dragons fight in the meadow. Their blood is black and yellow. The \
                       yielding that tries to rule provokes a struggle that wounds both sides.",
            },
        ],
        interpretations: &[
            "Receptivity is your strength now: listen, support, and let the situation \
             reveal its own shape.",
            "Follow a capable lead rather than forcing your own direction.",
            "Patience and devotion to the task will achieve more than initiative.",
            "Nurture what has already been started; this is a time for tending, not \
             planting.",
            "Openness to others' ideas will bring resources you could not find alone.",
        ],
    },
    brief(
        3,
        "Difficulty at the Beginning",
        "屯",
        Water,
        Thunder,
        "Difficulty at the beginning works supreme success. Nothing should be \
         undertaken hastily; it furthers one to appoint helpers.",
        "Clouds and thunder: the image of difficulty at the beginning. Thus the \
         superior one brings order out of confusion.",
        &["New beginnings are chaotic; persist through the confusion and find allies \
           to help sort it out."],
    ),
    brief(
        4,
        "Youthful Folly",
        "蒙",
        Mountain,
        Water,
        "Youthful folly has success. It is not I who seek the young fool; the young fool \
         seeks me.",
        "A spring wells up at the foot of the mountain. Thus the superior one fosters \
         character by thoroughness in all that they do.",
        &["Approach the situation as a learner. Ask sincere questions and accept \
           instruction without resentment."],
    ),
    brief(
        5,
        "Waiting",
        "需",
        Water,
        Heaven,
        "Waiting. If you are sincere, you have light and success. Perseverance brings \
         good fortune.",
        "Clouds rise up to heaven. Thus the superior one eats and drinks, is joyous and \
         of good cheer.",
        &["The outcome is not yet ready. Wait with calm confidence and keep your strength \
           for the right moment."],
    ),
    brief(
        6,
        "Conflict",
        "訟",
        Heaven,
        Water,
        "Conflict. You are sincere and are being obstructed. A cautious halt halfway \
         brings good fortune; going through to the end brings misfortune.",
        "Heaven and water go their opposite ways. Thus the superior one carefully \
         considers the beginning of every undertaking.",
        &["Avoid pushing a dispute to its end. Seek a fair arbiter and settle while \
           settlement is still possible."],
    ),
    brief(
        7,
        "The Army",
        "師",
        Earth,
        Water,
        "The army needs perseverance and a strong leader. Good fortune without blame.",
        "In the middle of the earth is water. Thus the superior one increases the masses \
         by generosity toward the people.",
        &["Organize your resources with discipline. Collective effort succeeds only under \
           clear and trusted leadership."],
    ),
    brief(
        8,
        "Holding Together",
        "比",
        Water,
        Earth,
        "Holding together brings good fortune. Those who are uncertain gradually join; \
         whoever comes too late meets with misfortune.",
        "On the earth is water. Thus the ancient kings bestowed the different states as \
         fiefs and cultivated friendly relations with their lords.",
        &["Unity is favoured. Join with others now, and be the kind of centre around \
           which people can gather."],
    ),
    brief(
        9,
        "The Taming Power of the Small",
        "小畜",
        Wind,
        Heaven,
        "The taming power of the small has success. Dense clouds, no rain from our \
         western region.",
        "The wind drives across heaven. Thus the superior one refines the outward aspect \
         of their nature.",
        &["Small, gentle influences accomplish what force cannot. Attend to details; the \
           larger breakthrough comes later."],
    ),
    brief(
        10,
        "Treading",
        "履",
        Heaven,
        Lake,
        "Treading upon the tail of the tiger. It does not bite. Success.",
        "Heaven above, the lake below. Thus the superior one discriminates between high \
         and low and so fortifies the thinking of the people.",
        &["Proceed with courtesy and care in a delicate situation; good conduct keeps you \
           safe where boldness would not."],
    ),
    Hexagram {
        number: 11,
        name: "Peace",
        chinese_name: Some("泰"),
        upper: Earth,
        lower: Heaven,
        judgment: "Peace. The small departs, the great approaches. Good fortune. Success.",
        image: "Heaven and earth unite: the image of peace. Thus the ruler divides and \
                completes the course of heaven and earth and so aids the people.",
        commentary: &[
            "The light principle is within and the dark without; strength stands at the \
             centre and devotion at the edge. High and low meet, and their aims are one.",
            "Peace is a season, not a possession. The lines warn that every plain is \
             followed by a slope, and that the time to prepare is while things go well.",
        ],
        changing_lines: &[
            LineText {
                position: 1,
                text: "When ribbon grass is pulled up, the sod comes with it. Each \
                       according to their kind. Undertakings bring good fortune.",
            },
            LineText {
                position: 2,
                text: "Bearing with the uncultured in gentleness, fording the river with \
                       resolution, not neglecting what is distant. Thus one walks the middle.",
            },
            LineText {
                position: 3,
                text: "No plain not followed by a slope. No going not followed by a \
                       return. Perseverance in danger is without blame.",
            },
            LineText {
                position: 4,
                text: "They flutter down, not boasting of their wealth, together with \
                       their neighbours, guileless and sincere.",
            },
            LineText {
                position: 5,
                text: "The sovereign gives a daughter in marriage. This brings blessing \
                       and supreme good fortune.",
            },
            LineText {
                position: 6,
                text: "The wall falls back into the moat. Do not use the army now. \
                       Perseverance brings humiliation.",
            },
        ],
        interpretations: &[
            "Harmony prevails. Use this favourable period to build, connect and share.",
            "Obstacles are receding; what was blocked now flows.",
            "Cooperation between different parties is easy now. Bring people together.",
            "Enjoy the good season but prepare for change; peace is a time, not a state.",
            "Generosity now strengthens bonds that will carry you through harder days.",
        ],
    },
    Hexagram {
        number: 12,
        name: "Standstill",
        chinese_name: Some("否"),
        upper: Heaven,
        lower: Earth,
        judgment: "Standstill. Evil people do not further the perseverance of the superior \
                   one. The great departs; the small approaches.",
        image: "Heaven and earth do not unite: the image of standstill. Thus the superior \
                one falls back on their inner worth to escape difficulties.",
        commentary: &[
            "Heaven draws upward and earth sinks down; there is no meeting between them, \
             and so nothing grows. Inferior influences gain ground.",
            "In such times the one of principle withdraws into seclusion and will not be \
             tempted by honours offered on corrupt terms.",
            "The standstill does not last forever. The final line shows it overturned; \
             first there is standstill, afterward good fortune.",
        ],
        changing_lines: &[
            LineText {
                position: 1,
                text: "When ribbon grass is pulled up, the sod comes with it. \
                       Perseverance brings good fortune and success. Withdraw together \
                       with those of like mind.",
            },
            LineText {
                position: 2,
                text: "They bear and endure; this means good fortune for the inferior. \
                       The standstill serves to help the great one to attain success.",
            },
            LineText {
                position: 3,
                text: "They bear shame. The unworthy who rose by wrong means begin to \
                       feel it.",
            },
            LineText {
                position: 4,
                text: "One who acts at the command of the highest remains without blame. \
                       Those of like mind partake of the blessing.",
            },
            LineText {
                position: 5,
                text: "Standstill is giving way. Good fortune for the great one. \
                       \"What if it should fail?\" In this way one ties it to a cluster of \
                       mulberry shoots.",
            },
            LineText {
                position: 6,
                text: "The standstill comes to an end. First standstill, then good \
                       fortune.",
            },
        ],
        interpretations: &[
            "Progress is blocked. Conserve your energy and keep your integrity intact.",
            "Communication breaks down now; do not force agreements that will not hold.",
            "Withdraw from unworthy alliances even if they offer short-term gain.",
            "Use the pause to strengthen your inner resources for the turn that will come.",
            "The blockage is temporary. Patience and principle will outlast it.",
        ],
    },
    brief(
        13,
        "Fellowship with Men",
        "同人",
        Heaven,
        Fire,
        "Fellowship with men in the open. Success. It furthers one to cross the great \
         water.",
        "Heaven together with fire. Thus the superior one organizes the clans and makes \
         distinctions between things.",
        &["Open, principled fellowship succeeds. Work with others on shared goals rather \
           than private interests."],
    ),
    brief(
        14,
        "Possession in Great Measure",
        "大有",
        Fire,
        Heaven,
        "Possession in great measure. Supreme success.",
        "Fire in heaven above. Thus the superior one curbs evil and furthers good, and so \
         obeys the benevolent will of heaven.",
        &["Abundance is at hand. Hold it with modesty and use it for the common good."],
    ),
    brief(
        15,
        "Modesty",
        "謙",
        Earth,
        Mountain,
        "Modesty creates success. The superior one carries things through.",
        "Within the earth, a mountain. Thus the superior one reduces what is too much and \
         augments what is too little.",
        &["Humility opens doors that pride closes. Balance what is excessive and let \
           results speak for themselves."],
    ),
    brief(
        16,
        "Enthusiasm",
        "豫",
        Thunder,
        Earth,
        "Enthusiasm. It furthers one to install helpers and to set armies marching.",
        "Thunder comes resounding out of the earth. Thus the ancient kings made music in \
         order to honour merit.",
        &["Genuine enthusiasm moves others. Inspire, but make sure the excitement rests \
           on something real."],
    ),
    brief(
        17,
        "Following",
        "隨",
        Lake,
        Thunder,
        "Following has supreme success. Perseverance furthers. No blame.",
        "Thunder in the middle of the lake. Thus the superior one at nightfall goes \
         indoors for rest and recuperation.",
        &["Adapt to the demands of the time. To lead well now, first learn to follow."],
    ),
    brief(
        18,
        "Work on What Has Been Spoiled",
        "蠱",
        Mountain,
        Wind,
        "Work on what has been spoiled has supreme success. Before the starting point, \
         three days; after the starting point, three days.",
        "The wind blows low on the mountain. Thus the superior one stirs up the people \
         and strengthens their spirit.",
        &["Something has decayed through neglect. Face it honestly, repair it with care, \
           and guard against a relapse."],
    ),
    brief(
        19,
        "Approach",
        "臨",
        Earth,
        Lake,
        "Approach has supreme success. Perseverance furthers. When the eighth month \
         comes, there will be misfortune.",
        "The earth above the lake. Thus the superior one is inexhaustible in their will \
         to teach and without limits in their tolerance.",
        &["Favourable influences are drawing near. Act while the season is rising, and \
           remember that it will turn."],
    ),
    brief(
        20,
        "Contemplation",
        "觀",
        Wind,
        Earth,
        "Contemplation. The ablution has been made but not yet the offering. Full of \
         trust they look up to them.",
        "The wind blows over the earth. Thus the kings of old visited the regions of the \
         world, contemplated the people, and gave instruction.",
        &["Step back and observe before acting. Seeing the whole situation clearly is \
           itself a form of influence."],
    ),
    brief(
        21,
        "Biting Through",
        "噬嗑",
        Fire,
        Thunder,
        "Biting through has success. It is favourable to let justice be administered.",
        "Thunder and lightning. Thus the kings of old made firm the laws through clearly \
         defined penalties.",
        &["An obstacle must be bitten through decisively. Address the problem directly \
           and fairly."],
    ),
    brief(
        22,
        "Grace",
        "賁",
        Mountain,
        Fire,
        "Grace has success. In small matters it is favourable to undertake something.",
        "Fire at the foot of the mountain. Thus the superior one clarifies current \
         affairs but dares not decide controversial issues this way.",
        &["Form and beauty matter, but they adorn substance rather than replace it. Keep \
           the essentials in view."],
    ),
    brief(
        23,
        "Splitting Apart",
        "剝",
        Mountain,
        Earth,
        "Splitting apart. It does not further one to go anywhere.",
        "The mountain rests on the earth. Thus those above can ensure their position only \
         by giving generously to those below.",
        &["Forces of decline are at work. Do not act against them head-on; hold still and \
           strengthen your foundation."],
    ),
    brief(
        24,
        "Return",
        "復",
        Earth,
        Thunder,
        "Return. Success. Going out and coming in without error. Friends come without \
         blame.",
        "Thunder within the earth. Thus the kings of antiquity closed the passes at the \
         time of solstice.",
        &["After a dark period the light returns. Let the new energy grow naturally; do \
           not rush it."],
    ),
    brief(
        25,
        "Innocence",
        "無妄",
        Heaven,
        Thunder,
        "Innocence. Supreme success. Perseverance furthers. If someone is not as they \
         should be, they have misfortune.",
        "Under heaven thunder rolls. Thus the kings of old, rich in virtue and in harmony \
         with the time, fostered and nourished all beings.",
        &["Act from sincerity rather than calculation. Unexpected events favour the one \
           without ulterior motives."],
    ),
    brief(
        26,
        "The Taming Power of the Great",
        "大畜",
        Mountain,
        Heaven,
        "The taming power of the great. Perseverance furthers. Not eating at home brings \
         good fortune.",
        "Heaven within the mountain. Thus the superior one acquaints themself with many \
         sayings of antiquity and many deeds of the past.",
        &["Great energy is being held in reserve. Accumulate knowledge and strength; it \
           will find its use."],
    ),
    brief(
        27,
        "The Corners of the Mouth",
        "頤",
        Mountain,
        Thunder,
        "The corners of the mouth. Perseverance brings good fortune. Pay heed to the \
         providing of nourishment.",
        "At the foot of the mountain, thunder. Thus the superior one is careful of their \
         words and temperate in eating and drinking.",
        &["Consider what you feed on and what you feed others, in body and in mind. Right \
           nourishment shapes the outcome."],
    ),
    brief(
        28,
        "Preponderance of the Great",
        "大過",
        Lake,
        Wind,
        "Preponderance of the great. The ridgepole sags to the breaking point. It \
         furthers one to have somewhere to go.",
        "The lake rises above the trees. Thus the superior one, when standing alone, is \
         unconcerned, and if they have to renounce the world, they are undaunted.",
        &["The load is too heavy for the structure. Extraordinary times call for decisive \
           but gentle change."],
    ),
    brief(
        29,
        "The Abysmal",
        "坎",
        Water,
        Water,
        "The abysmal repeated. If you are sincere, you have success in your heart, and \
         whatever you do succeeds.",
        "Water flows on uninterruptedly and reaches its goal. Thus the superior one walks \
         in lasting virtue and carries on the business of teaching.",
        &["Danger repeats itself. Like water, keep flowing forward without losing your \
           nature, and you will pass through."],
    ),
    brief(
        30,
        "The Clinging",
        "離",
        Fire,
        Fire,
        "The clinging. Perseverance furthers. It brings success. Care of the cow brings \
         good fortune.",
        "That which is bright rises twice. Thus the great one, by perpetuating this \
         brightness, illumines the four quarters of the world.",
        &["Clarity depends on what it clings to. Attach yourself to what is right and \
           your light will be steady."],
    ),
];
